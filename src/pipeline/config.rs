use banner_executor::ExecutorImpl;

/// Runtime options for an [`AdaptationPipeline`](super::AdaptationPipeline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Reject formats that the template does not list instead of adapting
    /// them with a warning.
    ///
    /// Defaults to `false`.
    pub strict_formats: bool,
    /// Adapt a template's formats concurrently when the `rayon-executor`
    /// feature is enabled. Ignored when an executor is supplied explicitly.
    ///
    /// Defaults to `true`.
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strict_formats: false,
            parallel: true,
        }
    }
}

impl PipelineConfig {
    pub(crate) fn executor(&self) -> ExecutorImpl {
        if self.parallel {
            ExecutorImpl::default()
        } else {
            ExecutorImpl::sequential()
        }
    }
}
