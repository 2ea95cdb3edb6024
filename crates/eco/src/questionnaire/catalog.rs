use super::domain::{AnswerOption, Question, QuestionId, Scale};
use std::sync::OnceLock;

const FREQUENCY_OPTIONS: [AnswerOption; 6] = [
    AnswerOption { value: 1, label: "Nunca" },
    AnswerOption { value: 2, label: "Raramente" },
    AnswerOption { value: 3, label: "Ocasionalmente" },
    AnswerOption { value: 4, label: "Algumas vezes" },
    AnswerOption { value: 5, label: "Com frequência" },
    AnswerOption { value: 6, label: "Sempre" },
];

const QUANTITY_OPTIONS: [AnswerOption; 6] = [
    AnswerOption { value: 1, label: "Nenhuma" },
    AnswerOption { value: 2, label: "Uma ou duas" },
    AnswerOption { value: 3, label: "Poucas" },
    AnswerOption { value: 4, label: "Algumas" },
    AnswerOption { value: 5, label: "Muitas" },
    AnswerOption { value: 6, label: "A maioria" },
];

impl Scale {
    pub fn options(self) -> &'static [AnswerOption] {
        match self {
            Scale::Frequency => &FREQUENCY_OPTIONS,
            Scale::Quantity => &QUANTITY_OPTIONS,
        }
    }

    pub fn option(self, value: i32) -> Option<&'static AnswerOption> {
        self.options()
            .iter()
            .find(|option| i32::from(option.value) == value)
    }
}

/// Read-only list of the 54 inventory items, in presentation order.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Process-wide catalog, built on first use.
    pub fn standard() -> &'static Self {
        static CATALOG: OnceLock<QuestionCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self {
            questions: standard_questions(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|question| question.id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn question(id: u16, scale: Scale, text: &'static str) -> Question {
    Question {
        id: QuestionId(id),
        text,
        scale,
    }
}

fn standard_questions() -> Vec<Question> {
    use Scale::{Frequency, Quantity};

    vec![
        question(1, Frequency, "Eu tento estar com as pessoas"),
        question(2, Frequency, "Eu deixo as pessoas decidirem o que elas querem fazer"),
        question(3, Frequency, "Eu me junto a grupos sociais"),
        question(4, Frequency, "Eu tento ter relacionamentos próximos com as pessoas"),
        question(5, Frequency, "Eu tento me filiar a organizações sociais"),
        question(6, Frequency, "Eu deixo outras pessoas exercerem muita influência sobre mim"),
        question(7, Frequency, "Eu tento estar incluído em atividades sociais informais"),
        question(8, Frequency, "Eu tento ter relações pessoais com as pessoas"),
        question(9, Frequency, "Eu tento incluir outras pessoas nos meus planos"),
        question(10, Frequency, "Eu deixo outras pessoas controlarem as minhas ações"),
        question(11, Frequency, "Eu tento ter pessoas à minha volta"),
        question(12, Frequency, "Eu tento me envolver pessoalmente com as pessoas"),
        question(
            13,
            Frequency,
            "Quando as pessoas estão envolvidas em alguma atividade eu tento me unir a elas",
        ),
        question(14, Frequency, "Eu sou facilmente guiado por outras pessoas"),
        question(15, Frequency, "Eu tento não estar sozinho"),
        question(16, Frequency, "Eu tento participar de atividades em grupos"),
        question(17, Quantity, "Eu tento ser amigável com as pessoas"),
        question(18, Quantity, "Eu deixo as pessoas decidirem o que elas querem fazer"),
        question(19, Quantity, "Os meus relacionamentos pessoais são frios e distantes"),
        question(20, Quantity, "Eu permito que outras pessoas executem suas responsabilidades"),
        question(21, Quantity, "Eu tento ter relacionamentos íntimos com as pessoas"),
        question(22, Quantity, "Eu deixo as pessoas influenciarem muito as minhas ações"),
        question(23, Quantity, "Eu tento chegar próximo das pessoas"),
        question(24, Quantity, "Eu permito que as pessoas controlem as minhas ações"),
        question(25, Quantity, "Eu ajo de forma fria e distante com as pessoas"),
        question(26, Quantity, "Eu sou facilmente guiado por outras pessoas"),
        question(27, Quantity, "Eu tento ter relações próximas e pessoais com outras pessoas"),
        question(28, Quantity, "Eu gosto que as pessoas me convidem para suas atividades"),
        question(29, Quantity, "Eu gosto que as pessoas ajam próximas e pessoalmente comigo"),
        question(30, Quantity, "Eu tento influenciar fortemente as ações de outras pessoas"),
        question(
            31,
            Quantity,
            "Eu gosto que as pessoas me convidem para me juntar às suas atividades",
        ),
        question(32, Quantity, "Eu gosto que as pessoas ajam objetivamente comigo"),
        question(33, Quantity, "Eu tento tomar a liderança quando estou com as pessoas"),
        question(34, Quantity, "Eu gosto que as pessoas me incluam em suas atividades"),
        question(35, Quantity, "Eu gosto que as pessoas ajam frias e distantes comigo"),
        question(
            36,
            Quantity,
            "Eu tento fazer com que as pessoas façam as coisas da maneira que eu acho que devem ser feitas",
        ),
        question(
            37,
            Quantity,
            "Eu gosto que as pessoas me perguntem se quero participar de suas discussões",
        ),
        question(38, Quantity, "Eu gosto que as pessoas ajam amigavelmente comigo"),
        question(
            39,
            Quantity,
            "Eu gosto que as pessoas me convidem para participar em suas atividades",
        ),
        question(40, Quantity, "Eu gosto que as pessoas ajam distantes comigo"),
        question(41, Frequency, "Eu tento ser dominante quando estou com as pessoas"),
        question(42, Frequency, "Eu gosto que as pessoas me convidem para suas atividades"),
        question(43, Frequency, "Eu gosto que as pessoas ajam objetivamente comigo"),
        question(44, Frequency, "Eu tento fazer com que as pessoas façam as coisas que eu gosto"),
        question(
            45,
            Frequency,
            "Eu gosto que as pessoas me convidem para me juntar às suas atividades",
        ),
        question(46, Frequency, "Eu gosto que as pessoas ajam frias e distantes para comigo"),
        question(47, Frequency, "Eu tento influenciar fortemente as ações das pessoas"),
        question(48, Frequency, "Eu gosto que as pessoas me incluam em suas atividades"),
        question(49, Frequency, "Eu gosto que as pessoas ajam intimamente e pessoalmente comigo"),
        question(50, Frequency, "Eu tento assumir a liderança quando estou com outras pessoas"),
        question(
            51,
            Frequency,
            "Eu gosto que as pessoas me convidem para participar em suas atividades",
        ),
        question(52, Frequency, "Eu gosto que as pessoas ajam distantes para comigo"),
        question(53, Frequency, "Eu tento que as pessoas façam as coisas da maneira que eu gosto"),
        question(54, Frequency, "Eu assumo a liderança quando estou com outras pessoas"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_54_questions_in_id_order() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.len(), 54);
        for (index, question) in catalog.questions().iter().enumerate() {
            assert_eq!(usize::from(question.id.0), index + 1);
            assert!(!question.text.trim().is_empty());
        }
    }

    #[test]
    fn quantity_scale_covers_questions_17_through_40() {
        let catalog = QuestionCatalog::standard();
        for question in catalog.questions() {
            let expected = if (17..=40).contains(&question.id.0) {
                Scale::Quantity
            } else {
                Scale::Frequency
            };
            assert_eq!(question.scale, expected, "question {}", question.id);
        }
    }

    #[test]
    fn option_sets_are_six_point_ordinal_scales() {
        for scale in Scale::ordered() {
            let values: Vec<u8> = scale.options().iter().map(|option| option.value).collect();
            assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        }
        assert_eq!(Scale::Frequency.option(6).map(|o| o.label), Some("Sempre"));
        assert_eq!(Scale::Quantity.option(1).map(|o| o.label), Some("Nenhuma"));
        assert!(Scale::Quantity.option(7).is_none());
        assert!(Scale::Frequency.option(0).is_none());
    }

    #[test]
    fn lookup_by_id_and_position_agree() {
        let catalog = QuestionCatalog::standard();
        let question = catalog.question(QuestionId(36)).expect("question 36 exists");
        assert_eq!(catalog.position(question.id), Some(35));
        assert!(catalog.question(QuestionId(55)).is_none());
        assert!(catalog.question(QuestionId(0)).is_none());
    }
}
