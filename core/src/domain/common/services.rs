use std::sync::Arc;

use crate::domain::common::DemoConfig;

/// Request-independent handle over every provider the flows talk to.
///
/// Built once at startup and shared by all requests; it holds no mutable
/// state, so cloning only bumps reference counts.
pub struct Service<LLM, IF, IA, OS> {
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) image_fetcher: Arc<IF>,
    pub(crate) image_annotator: Arc<IA>,
    pub(crate) object_storage: Arc<OS>,
    pub(crate) demo: DemoConfig,
}

impl<LLM, IF, IA, OS> Service<LLM, IF, IA, OS> {
    pub fn new(
        llm_client: LLM,
        image_fetcher: IF,
        image_annotator: IA,
        object_storage: OS,
        demo: DemoConfig,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            image_fetcher: Arc::new(image_fetcher),
            image_annotator: Arc::new(image_annotator),
            object_storage: Arc::new(object_storage),
            demo,
        }
    }
}

impl<LLM, IF, IA, OS> Clone for Service<LLM, IF, IA, OS> {
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            image_fetcher: Arc::clone(&self.image_fetcher),
            image_annotator: Arc::clone(&self.image_annotator),
            object_storage: Arc::clone(&self.object_storage),
            demo: self.demo.clone(),
        }
    }
}
