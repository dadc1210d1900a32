use crate::request::NormalizedRequest;
use crate::stage::Stage;
use tracing::debug;

pub struct StagePipeline;

impl StagePipeline {
    /// Threads `request` through `stages` in order, stopping at the first
    /// stage that excludes it.
    pub fn run(stages: &[Stage], mut request: NormalizedRequest) -> NormalizedRequest {
        for stage in stages {
            request = stage.apply(request);
            if request.is_excluded() {
                debug!(
                    stage = stage.name(),
                    method = request.method(),
                    path = request.path(),
                    "request excluded from identification"
                );
                break;
            }
        }
        request
    }
}
