use crate::domain::restaurant::value_objects::FilterState;

#[derive(Debug, Clone)]
pub struct RandomPickInput {
    pub filter: FilterState,
}

#[derive(Clone)]
pub struct RecommendInput {
    pub user_text: String,
    pub filter: FilterState,
    /// Per-request key; the configured server key is used when absent.
    pub credential: Option<String>,
}

impl std::fmt::Debug for RecommendInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendInput")
            .field("user_text", &self.user_text)
            .field("filter", &self.filter)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
