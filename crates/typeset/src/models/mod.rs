pub mod resume;

pub use resume::{
    AchievementEntry, CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo,
    ProjectEntry, Resume, Skills, TechnologyList,
};
