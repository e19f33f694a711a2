use serde::Serialize;

/// Resume text paired with the role the candidate is targeting.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_role: Option<String>,
}

impl AnalysisRequest {
    pub fn new(resume_text: String, job_role: Option<String>) -> Self {
        Self {
            resume_text,
            job_role,
        }
    }

    /// The role hint with surrounding whitespace removed, or `None` if blank.
    pub fn target_role(&self) -> Option<&str> {
        self.job_role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub analysis: String,
}

impl Analysis {
    pub fn new(analysis: String) -> Self {
        Self { analysis }
    }
}
