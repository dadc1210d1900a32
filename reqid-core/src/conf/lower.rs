use crate::conf::{ComponentConfig, ConfigError, GeneratorConfig};
use crate::request::Component;
use crate::stage::{FilterPolicy, NamedStage, Stage};
use tracing::warn;

impl GeneratorConfig {
    /// Turns the config into the ordered stage list a generator runs.
    ///
    /// Fails on unknown named stages and empty method names, so a bad config
    /// is caught before any request is identified.
    pub fn lower(&self) -> Result<Vec<Stage>, ConfigError> {
        let mut stages = Vec::new();

        if let Some(methods) = &self.method_restrict {
            if methods.iter().any(|m| m.is_empty()) {
                return Err(ConfigError::EmptyMethod);
            }
            stages.push(Stage::MethodRestrict(methods.clone()));
        }

        if let Some(patterns) = &self.path_restrict {
            stages.push(Stage::PathRestrict(patterns.clone()));
        }

        if let Some(patterns) = &self.path_except {
            stages.push(Stage::PathExcept(patterns.clone()));
        }

        lower_component(Component::Header, &self.header, &mut stages);
        lower_component(Component::Query, &self.query, &mut stages);
        lower_component(Component::Cookie, &self.cookie, &mut stages);

        for name in &self.named_stages {
            let named: NamedStage = name
                .parse()
                .map_err(|_| ConfigError::unknown_named_stage(name.as_str()))?;
            stages.push(Stage::Named(named));
        }

        Ok(stages)
    }
}

fn lower_component(component: Component, cfg: &ComponentConfig, stages: &mut Vec<Stage>) {
    if !cfg.enabled {
        if cfg.accept.is_some() || cfg.drop.is_some() {
            warn!(
                component = component.as_str(),
                "component is disabled; its accept/drop patterns are ignored"
            );
        }
        return;
    }

    if cfg.accept.is_none() && cfg.drop.is_none() {
        stages.push(Stage::enable(component));
        return;
    }

    if let Some(patterns) = &cfg.accept {
        stages.push(Stage::filter(component, FilterPolicy::Accept(patterns.clone())));
    }

    if let Some(patterns) = &cfg.drop {
        stages.push(Stage::filter(component, FilterPolicy::Drop(patterns.clone())));
    }
}
