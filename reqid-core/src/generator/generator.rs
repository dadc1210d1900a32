use crate::conf::{ConfigError, DEFAULT_HEADER_ACCEPT, DEFAULT_METHODS, GeneratorConfig};
use crate::matcher::WildCard;
use crate::request::{Component, NormalizedRequest, RawRequest, RequestId, hash_request};
use crate::stage::registry::TRACKING_QUERY_PARAMS;
use crate::stage::{NamedStage, Stage, StagePipeline};
use sha2::{Digest, Sha256};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use tracing::trace;

/// Derives [`RequestId`]s from raw requests.
///
/// The stage list is fixed at construction; a generator can be shared across
/// threads and called concurrently. `D` is the hash, instantiated fresh for
/// every call.
pub struct Generator<D = Sha256> {
    stages: Vec<Stage>,
    hasher: PhantomData<fn() -> D>,
}

impl Generator {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self::with_digest(stages)
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn from_config(cfg: &GeneratorConfig) -> Result<Self, ConfigError> {
        Self::from_config_with_digest(cfg)
    }

    /// The generator described by [`GeneratorConfig::default`].
    pub fn preset() -> Self {
        Self::default()
    }
}

impl<D: Digest> Generator<D> {
    pub fn with_digest(stages: Vec<Stage>) -> Self {
        Self {
            stages: stages.into_iter().map(Stage::canonicalize).collect(),
            hasher: PhantomData,
        }
    }

    pub fn from_config_with_digest(cfg: &GeneratorConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_digest(cfg.lower()?))
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs the pipeline without hashing. Components that no stage included
    /// are still present.
    pub fn normalize<R: RawRequest + ?Sized>(&self, raw: &R) -> NormalizedRequest {
        StagePipeline::run(&self.stages, NormalizedRequest::from_raw(raw))
    }

    /// Returns the id of `raw` and whether the request is eligible for one.
    ///
    /// Ineligible requests get [`RequestId::zero`] and `false`.
    pub fn generate_id<R: RawRequest + ?Sized>(&self, raw: &R) -> (RequestId, bool) {
        let mut req = self.normalize(raw);
        if req.is_excluded() {
            return (RequestId::zero::<D>(), false);
        }

        req.retain_included();
        let id = hash_request::<D>(&req);
        trace!(request_id = %id, method = req.method(), path = req.path(), "request identified");
        (id, true)
    }

    pub fn identify<R: RawRequest + ?Sized>(&self, raw: &R) -> Option<RequestId> {
        match self.generate_id(raw) {
            (id, true) => Some(id),
            (_, false) => None,
        }
    }
}

impl<D: Digest> Default for Generator<D> {
    fn default() -> Self {
        GeneratorBuilder::<D>::default()
            .method_restrict(DEFAULT_METHODS)
            .header_accept(DEFAULT_HEADER_ACCEPT)
            .query_drop(TRACKING_QUERY_PARAMS)
            .named(NamedStage::NormalizeAcceptEncoding)
            .build()
    }
}

impl<D> Clone for Generator<D> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
            hasher: PhantomData,
        }
    }
}

impl<D> Debug for Generator<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("stages", &self.stages)
            .finish()
    }
}

/// Appends stages in call order. Order matters: a later filter sees what an
/// earlier one left behind.
pub struct GeneratorBuilder<D = Sha256> {
    stages: Vec<Stage>,
    hasher: PhantomData<fn() -> D>,
}

impl<D: Digest> Default for GeneratorBuilder<D> {
    fn default() -> Self {
        Self {
            stages: Vec::new(),
            hasher: PhantomData,
        }
    }
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Digest> GeneratorBuilder<D> {
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn method_restrict<I, S>(self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stage(Stage::method_restrict(methods))
    }

    pub fn path_restrict<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::path_restrict(patterns))
    }

    pub fn path_except<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::path_except(patterns))
    }

    pub fn header_accept<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::accept_list(Component::Header, patterns))
    }

    pub fn header_drop<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::drop_list(Component::Header, patterns))
    }

    pub fn header_enable(self) -> Self {
        self.stage(Stage::enable(Component::Header))
    }

    pub fn query_accept<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::accept_list(Component::Query, patterns))
    }

    pub fn query_drop<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::drop_list(Component::Query, patterns))
    }

    pub fn query_enable(self) -> Self {
        self.stage(Stage::enable(Component::Query))
    }

    pub fn query_drop_tracking(self) -> Self {
        self.named(NamedStage::DropTrackingQuery)
    }

    pub fn cookie_accept<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::accept_list(Component::Cookie, patterns))
    }

    pub fn cookie_drop<I, W>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        self.stage(Stage::drop_list(Component::Cookie, patterns))
    }

    pub fn cookie_enable(self) -> Self {
        self.stage(Stage::enable(Component::Cookie))
    }

    pub fn named(self, stage: NamedStage) -> Self {
        self.stage(Stage::Named(stage))
    }

    pub fn build(self) -> Generator<D> {
        Generator::with_digest(self.stages)
    }
}
