#![deny(warnings)]

//! Headless CLI: load a production snapshot, print scene intelligence and a
//! what-if comparison against the baseline.

use anyhow::{bail, Context, Result};
use reel_core::{validate_production, Production};
use reel_intel::{script_intelligence, summarize, SceneIntelligence, ScriptContext, ScriptSummary};
use reel_sim::{
    parse_scenarios, Comparison, ScenarioCatalog, SimulationParams, SimulationSession, Tone,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_PRODUCTION: &str = include_str!("../../../assets/production.yaml");

#[derive(Debug, Default, PartialEq)]
struct Args {
    data: Option<PathBuf>,
    scenario: Option<PathBuf>,
    catalog: Option<PathBuf>,
    select: Vec<String>,
    action_multiplier: Option<f64>,
    vfx_scale: Option<f64>,
    song_count: Option<u8>,
    json: bool,
}

fn value<I: Iterator<Item = String>>(it: &mut I, flag: &str) -> Result<String> {
    it.next()
        .with_context(|| format!("{flag} expects a value"))
}

fn number<I, T>(it: &mut I, flag: &str) -> Result<T>
where
    I: Iterator<Item = String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = value(it, flag)?;
    raw.parse()
        .with_context(|| format!("{flag} expects a number, got {raw:?}"))
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--data" => out.data = Some(value(&mut it, &arg)?.into()),
            "--scenario" => out.scenario = Some(value(&mut it, &arg)?.into()),
            "--catalog" => out.catalog = Some(value(&mut it, &arg)?.into()),
            "--select" => out.select.push(value(&mut it, &arg)?),
            "--action-multiplier" => out.action_multiplier = Some(number(&mut it, &arg)?),
            "--vfx-scale" => out.vfx_scale = Some(number(&mut it, &arg)?),
            "--song-count" => out.song_count = Some(number(&mut it, &arg)?),
            "--json" => out.json = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(out)
}

/// What-if settings read from `--scenario`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioConfig {
    scenarios: Vec<String>,
    action_multiplier: Option<f64>,
    vfx_scale: Option<f64>,
    song_count: Option<u8>,
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn load_production(path: Option<&Path>) -> Result<Production> {
    let production: Production = match path {
        None => serde_yaml::from_str(SAMPLE_PRODUCTION).context("embedded sample production")?,
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading {}", p.display()))?;
            if is_json(p) {
                serde_json::from_str(&text).with_context(|| format!("parsing {}", p.display()))?
            } else {
                serde_yaml::from_str(&text).with_context(|| format!("parsing {}", p.display()))?
            }
        }
    };
    validate_production(&production)?;
    Ok(production)
}

fn load_yaml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Merge scenario file and command-line overrides; flags win.
fn resolve_params(args: &Args, file: &ScenarioConfig) -> Result<SimulationParams> {
    let d = SimulationParams::default();
    let params = SimulationParams {
        action_multiplier: args
            .action_multiplier
            .or(file.action_multiplier)
            .unwrap_or(d.action_multiplier),
        vfx_scale: args.vfx_scale.or(file.vfx_scale).unwrap_or(d.vfx_scale),
        song_count: args.song_count.or(file.song_count).unwrap_or(d.song_count),
    };
    params.validate()?;
    Ok(params)
}

#[derive(Serialize)]
struct Report<'a> {
    title: &'a str,
    summary: &'a ScriptSummary,
    scenes: &'a [SceneIntelligence],
    comparison: &'a Comparison,
    ignored_scenarios: Vec<String>,
}

fn tone_tag(t: Tone) -> &'static str {
    match t {
        Tone::Good => "good",
        Tone::Bad => "bad",
        Tone::Neutral => "",
    }
}

fn print_text(title: &str, summary: &ScriptSummary, intel: &[SceneIntelligence], cmp: &Comparison) {
    println!(
        "{} | scenes: {} | budget: {} Cr | AI cost: {} Cr | feasibility: {:.1} | health: {}/100",
        title,
        summary.scene_count,
        summary.total_budget,
        summary.total_ai_cost,
        summary.mean_feasibility,
        summary.health.score
    );
    println!(
        "appeal | mass: {}% | class: {}% | vfx load: {} | risk: {} critical, {} high, {} medium, {} low",
        summary.appeal.mass,
        summary.appeal.class,
        summary.vfx_intensity,
        summary.risk.critical,
        summary.risk.high,
        summary.risk.medium,
        summary.risk.low
    );
    println!(
        "{:>3}  {:<9} {:>5} {:>7} {:>4}  {:<8} {:>5} {:>4}  cast",
        "#", "kind", "feas", "ai cost", "int", "risk", "shots", "days"
    );
    for i in intel {
        let cast: Vec<&str> = i.linked_actors.iter().map(|a| a.name.as_str()).collect();
        println!(
            "{:>3}  {:<9} {:>5.1} {:>7} {:>4.1}  {:<8} {:>5} {:>4}  {}",
            i.scene.scene_number,
            i.scene.complexity,
            i.feasibility,
            i.ai_cost,
            i.intensity,
            i.safety_risk.level,
            i.estimated_shots,
            i.shoot_days,
            cast.join(", ")
        );
    }
    println!("what-if vs baseline");
    for d in &cmp.deltas {
        println!(
            "  {:<13} {:>8.1} -> {:>8.1}  {:<16} {}",
            d.metric,
            d.baseline,
            d.simulated,
            d.render(),
            tone_tag(d.tone())
        );
    }
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    info!(data = ?args.data, scenario = ?args.scenario, "starting CLI");

    let production = load_production(args.data.as_deref())?;
    let scenario_file: ScenarioConfig = match &args.scenario {
        Some(p) => load_yaml(p)?,
        None => ScenarioConfig::default(),
    };
    let catalog: ScenarioCatalog = match &args.catalog {
        Some(p) => load_yaml(p)?,
        None => ScenarioCatalog::default(),
    };
    let params = resolve_params(&args, &scenario_file)?;
    let (selection, unknown) = parse_scenarios(
        scenario_file
            .scenarios
            .iter()
            .chain(args.select.iter()),
    );

    let intel = script_intelligence(&production.scenes, &ScriptContext::from_production(&production));
    let summary = summarize(&intel);
    let mut session = SimulationSession::from_production(&production, catalog);
    let comparison = session.compare(&selection, &params);
    info!(
        scenarios = selection.len(),
        scenes = comparison.simulated.scene_count,
        "simulation complete"
    );

    if args.json {
        let report = Report {
            title: &production.title,
            summary: &summary,
            scenes: &intel,
            comparison: &comparison,
            ignored_scenarios: unknown.into_iter().map(|u| u.0).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&production.title, &summary, &intel, &comparison);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_flags() {
        let a = args(&[
            "--select",
            "remove-switzerland",
            "--select",
            "cut-item-song",
            "--action-multiplier",
            "1.5",
            "--song-count",
            "2",
            "--json",
        ])
        .unwrap();
        assert_eq!(a.select, vec!["remove-switzerland", "cut-item-song"]);
        assert_eq!(a.action_multiplier, Some(1.5));
        assert_eq!(a.song_count, Some(2));
        assert!(a.json);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&["--vfx-scale"]).is_err());
        assert!(args(&["--vfx-scale", "lots"]).is_err());
        assert!(args(&["--frobnicate"]).is_err());
    }

    #[test]
    fn flags_override_scenario_file() {
        let a = args(&["--vfx-scale", "2.0"]).unwrap();
        let file = ScenarioConfig {
            scenarios: vec![],
            action_multiplier: Some(0.8),
            vfx_scale: Some(0.5),
            song_count: None,
        };
        let p = resolve_params(&a, &file).unwrap();
        assert_eq!(p.action_multiplier, 0.8);
        assert_eq!(p.vfx_scale, 2.0);
        assert_eq!(p.song_count, SimulationParams::default().song_count);

        let a = args(&["--song-count", "9"]).unwrap();
        assert!(resolve_params(&a, &ScenarioConfig::default()).is_err());
    }

    #[test]
    fn embedded_sample_is_valid() {
        let p = load_production(None).unwrap();
        assert_eq!(p.scenes.len(), 12);
        assert!(!p.roles.is_empty());
    }
}
