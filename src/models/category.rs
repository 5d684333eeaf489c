use serde::Serialize;

/// Activity label shared by time entries and tasks.
///
/// The billable flag is a static property of the category: it is resolved
/// once here and never duplicated per screen or per caller.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ActivityCategory {
    Demo,
    Training,
    LessonPlanPreparation,
    PrePostPresentation,
    CorporateConsultingTraining,
    Project,
    ConsultingContentPrep,
    TechSupport,
    Meeting,
    DevLearning,
    Misc,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 11] = [
        Self::Demo,
        Self::Training,
        Self::LessonPlanPreparation,
        Self::PrePostPresentation,
        Self::CorporateConsultingTraining,
        Self::Project,
        Self::ConsultingContentPrep,
        Self::TechSupport,
        Self::Meeting,
        Self::DevLearning,
        Self::Misc,
    ];

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "demo" => Some(Self::Demo),
            "training" => Some(Self::Training),
            "lessonPlanPreparation" => Some(Self::LessonPlanPreparation),
            "prePostPresentation" => Some(Self::PrePostPresentation),
            "corporateConsultingTraining" => Some(Self::CorporateConsultingTraining),
            "project" => Some(Self::Project),
            "consultingContentPrep" => Some(Self::ConsultingContentPrep),
            "techSupport" => Some(Self::TechSupport),
            "meeting" => Some(Self::Meeting),
            "devLearning" => Some(Self::DevLearning),
            "misc" => Some(Self::Misc),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Training => "training",
            Self::LessonPlanPreparation => "lessonPlanPreparation",
            Self::PrePostPresentation => "prePostPresentation",
            Self::CorporateConsultingTraining => "corporateConsultingTraining",
            Self::Project => "project",
            Self::ConsultingContentPrep => "consultingContentPrep",
            Self::TechSupport => "techSupport",
            Self::Meeting => "meeting",
            Self::DevLearning => "devLearning",
            Self::Misc => "misc",
        }
    }

    /// Lenient parse for CLI input: accepts the DB value or a
    /// dashed/lowercase form such as "tech-support".
    pub fn from_code(code: &str) -> Option<Self> {
        let norm: String = code
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .iter()
            .find(|c| c.to_db_str().to_lowercase() == norm)
            .copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Demo => "Demo",
            Self::Training => "Training",
            Self::LessonPlanPreparation => "Lesson Plan Preparation",
            Self::PrePostPresentation => "Pre/Post Presentation",
            Self::CorporateConsultingTraining => "Corporate Consulting/Training",
            Self::Project => "Project",
            Self::ConsultingContentPrep => "Consulting Content Prep",
            Self::TechSupport => "Tech Support",
            Self::Meeting => "Meeting",
            Self::DevLearning => "Dev/Learning",
            Self::Misc => "Miscellaneous",
        }
    }

    /// Static category → billable table. Meetings and miscellaneous work do
    /// not count toward client-chargeable hours; everything else does.
    pub fn is_billable(&self) -> bool {
        !matches!(self, Self::Meeting | Self::Misc)
    }

    /// Categories that face a customer directly; completed tasks in these
    /// categories prompt for customer feedback.
    pub fn is_trainer_facing(&self) -> bool {
        matches!(self, Self::Demo | Self::CorporateConsultingTraining)
    }
}

/// Billability of a raw category string. Unknown categories default to
/// non-billable.
pub fn billable_for(category: &str) -> bool {
    ActivityCategory::from_db_str(category)
        .map(|c| c.is_billable())
        .unwrap_or(false)
}
