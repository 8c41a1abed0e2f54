use memsim_alloc::{AllocationReport, allocate, allocate_named};
use memsim_core::Algorithm;
use memsim_core::config::DefaultsConfig;

use crate::OutputFormat;

pub struct Request<'a> {
    pub processes: &'a [u64],
    pub partitions: &'a [u64],
    pub algorithm: Option<&'a str>,
    pub all: bool,
}

/// Run the requested allocations and render them.
pub fn run(
    req: &Request<'_>,
    defaults: &DefaultsConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let reports: Vec<AllocationReport> = if req.all {
        Algorithm::ALL
            .into_iter()
            .map(|a| allocate(req.processes, req.partitions, a))
            .collect()
    } else {
        let token = req.algorithm.unwrap_or(defaults.algorithm.token());
        vec![allocate_named(req.processes, req.partitions, token)?]
    };

    render(&reports, format)
}

fn render(reports: &[AllocationReport], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let json = match reports {
                [single] => serde_json::to_value(single.to_groups())?,
                many => serde_json::Value::Object(
                    many.iter()
                        .map(|r| (r.algorithm.token().to_string(), serde_json::json!(r.to_groups())))
                        .collect(),
                ),
            };
            Ok(format!("{}\n", serde_json::to_string(&json)?))
        }
        OutputFormat::Text => Ok(reports
            .iter()
            .map(AllocationReport::format_text)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use memsim_core::AllocError;

    use super::*;

    const PROCESSES: [u64; 4] = [234, 417, 322, 122];
    const PARTITIONS: [u64; 5] = [600, 500, 300, 100, 200];

    fn request(algorithm: Option<&str>, all: bool) -> Request<'_> {
        Request {
            processes: &PROCESSES,
            partitions: &PARTITIONS,
            algorithm,
            all,
        }
    }

    #[test]
    fn json_single_algorithm() {
        let out = run(&request(Some("First-Fit"), false), &DefaultsConfig::default(), OutputFormat::Json).unwrap();
        assert_eq!(
            out.trim(),
            "[[600,234,122],[500,417],[300,0],[100,0],[200,0],[0,322]]"
        );
    }

    #[test]
    fn falls_back_to_configured_default() {
        let defaults = DefaultsConfig {
            algorithm: Algorithm::WorstFit,
        };
        let out = run(&request(None, false), &defaults, OutputFormat::Text).unwrap();
        assert!(out.starts_with("Worst-Fit allocation"));
    }

    #[test]
    fn all_algorithms_keyed_by_token() {
        let out = run(&request(None, true), &DefaultsConfig::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["First-Fit"][5], serde_json::json!([0, 322]));
        assert_eq!(value["Best-Fit"][0], serde_json::json!([600, 322]));
        assert_eq!(value["Worst-Fit"][0], serde_json::json!([600, 234, 322]));
    }

    #[test]
    fn unknown_algorithm_is_an_error() {
        let err = run(&request(Some("Next-Fit"), false), &DefaultsConfig::default(), OutputFormat::Text)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<AllocError>(),
            Some(&AllocError::UnknownAlgorithm("Next-Fit".to_string()))
        );
    }
}
