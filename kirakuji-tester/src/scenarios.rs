//! Scenarios the tester can run against a Kirakuji deployment.
//!
//! Network scenarios go through the same [`KirakujiClient`] and
//! [`HomeController`] the browser build uses, so a pass here means the page
//! would see the same responses.

use kirakuji_core::{
    ApiError, FlowEvent, HomeController, KirakujiClient, MAX_CONTENT_CHARS, PostContent, Step,
    Transport, can_submit, split_message,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Smoke,
    PostOnly,
    DrawOnly,
    Validation,
}

impl Scenario {
    pub const ALL: [Self; 4] = [Self::Smoke, Self::PostOnly, Self::DrawOnly, Self::Validation];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::PostOnly => "post-only",
            Self::DrawOnly => "draw-only",
            Self::Validation => "validation",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Smoke => "Post a confession, then draw and expect a fortune",
            Self::PostOnly => "Post a confession and expect a post id back",
            Self::DrawOnly => "Draw a fortune without posting first",
            Self::Validation => "Local content and layout checks (no network)",
        }
    }

    pub const fn needs_network(self) -> bool {
        !matches!(self, Self::Validation)
    }
}

pub fn get_scenario(name: &str) -> Option<Scenario> {
    Scenario::ALL.into_iter().find(|s| s.key() == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<_> = Scenario::ALL
        .iter()
        .map(|s| (s.key(), s.description()))
        .collect();
    entries.push(("all", "Every scenario above"));
    entries
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("api call failed: {0}")]
    Api(#[from] ApiError),
    #[error("flow stopped at step {step}: {message}")]
    Flow { step: &'static str, message: String },
    #[error("check failed: {0}")]
    Check(String),
}

/// Outcome of running one scenario for a number of iterations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    /// Fortunes returned by successful draws, in order.
    pub fortunes: Vec<String>,
}

pub struct ScenarioRunner<T> {
    controller: HomeController<T>,
    content: String,
    verbose: bool,
}

impl<T: Transport> ScenarioRunner<T> {
    pub fn new(client: KirakujiClient<T>, content: String, verbose: bool) -> Self {
        Self {
            controller: HomeController::new(client),
            content,
            verbose,
        }
    }

    pub async fn run(&self, scenario: Scenario, iterations: usize) -> ScenarioResult {
        let iterations = iterations.max(1);
        let mut failures = Vec::new();
        let mut fortunes = Vec::new();
        let mut total = Duration::ZERO;

        for iteration in 0..iterations {
            let start = Instant::now();
            let outcome = self.run_once(scenario).await;
            let elapsed = start.elapsed();
            total += elapsed;

            match outcome {
                Ok(fortune) => {
                    if self.verbose {
                        log::info!("{} #{iteration} ok in {elapsed:?}", scenario.key());
                    }
                    fortunes.extend(fortune);
                }
                Err(err) => {
                    log::warn!("{} #{iteration} failed: {err}", scenario.key());
                    failures.push(format!("iteration {iteration}: {err}"));
                }
            }
        }

        let divisor = u32::try_from(iterations).unwrap_or(u32::MAX);
        ScenarioResult {
            scenario_name: scenario.key().to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations - failures.len(),
            failures,
            average_duration: total / divisor,
            fortunes,
        }
    }

    async fn run_once(&self, scenario: Scenario) -> Result<Option<String>, ScenarioError> {
        match scenario {
            Scenario::Smoke => self.post_then_draw().await.map(Some),
            Scenario::PostOnly => {
                let content = PostContent::parse(&self.content)
                    .map_err(|err| ScenarioError::Check(err.to_string()))?;
                let created = self.controller.client().create_post(&content).await?;
                if created.post_id.is_empty() {
                    return Err(ScenarioError::Check("empty post_id in response".into()));
                }
                Ok(None)
            }
            Scenario::DrawOnly => {
                let draw = self.controller.client().fetch_random_draw().await?;
                if draw.result.trim().is_empty() {
                    return Err(ScenarioError::Check("empty draw result".into()));
                }
                Ok(Some(draw.result))
            }
            Scenario::Validation => validate_locally().map(|()| None),
        }
    }

    async fn post_then_draw(&self) -> Result<String, ScenarioError> {
        let controller = &self.controller;
        controller.dispatch(FlowEvent::Open);
        controller.dispatch(FlowEvent::Edit(self.content.clone()));

        controller.submit().await;
        let flow = controller.snapshot();
        if flow.step != Step::Ready {
            return Err(stopped(&flow.step));
        }

        match controller.draw().await {
            Some(text) if !text.trim().is_empty() => Ok(text),
            Some(_) => Err(ScenarioError::Check("empty draw result".into())),
            None => Err(stopped(&controller.snapshot().step)),
        }
    }
}

fn stopped(step: &Step) -> ScenarioError {
    ScenarioError::Flow {
        step: step.name(),
        message: match step {
            Step::Error(message) => message.clone(),
            _ => String::new(),
        },
    }
}

fn validate_locally() -> Result<(), ScenarioError> {
    let at_limit = "闇".repeat(MAX_CONTENT_CHARS);
    let over_limit = "闇".repeat(MAX_CONTENT_CHARS + 1);
    let checks = [
        ("blank input is rejected", !can_submit("   ")),
        ("single character is accepted", can_submit("闇")),
        ("input at the limit is accepted", can_submit(&at_limit)),
        ("input over the limit is rejected", !can_submit(&over_limit)),
        (
            "padding does not count toward the limit",
            can_submit(&format!("  {at_limit}  ")),
        ),
        (
            "short messages stay on one line",
            split_message("大吉", 16) == vec!["大吉".to_string()],
        ),
        (
            "long messages break after punctuation",
            split_message("今日はとても良い日です。明日もきっと良い日になるでしょう。", 16)
                == vec![
                    "今日はとても良い日です。".to_string(),
                    "明日もきっと良い日になるでしょう。".to_string(),
                ],
        ),
    ];

    match checks.iter().find(|(_, ok)| !ok) {
        Some((name, _)) => Err(ScenarioError::Check((*name).to_string())),
        None => Ok(()),
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
