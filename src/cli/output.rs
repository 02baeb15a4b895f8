//! Output formatting for CLI results

use std::io::{self, Write};

use crate::comparison::ComparisonSummary;
use crate::core::SimilarityScore;
use crate::error::{Error, Result};

const RULE_WIDTH: usize = 45;

/// Fixed-format console block for a similarity score
pub fn format_report(similarity: &SimilarityScore) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\n\
         🔊 ADVANCED AUDIO SIMILARITY ANALYSIS\n\
         {rule}\n\
         🎧 Similarity Score      : {:.4}\n\
         🎧 Similarity Percentage : {:.2}%\n\
         {rule}\n",
        similarity.score,
        similarity.percentage,
        rule = rule,
    )
}

/// Pretty-printed JSON summary
pub fn format_json(summary: &ComparisonSummary) -> Result<String> {
    serde_json::to_string_pretty(summary)
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write the report block to stdout
pub fn print_report(similarity: &SimilarityScore) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", format_report(similarity))?;
    out.flush()?;
    Ok(())
}

pub fn print_json(summary: &ComparisonSummary) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", format_json(summary)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::InputSummary;
    use chrono::Utc;

    #[test]
    fn test_format_report() {
        let report = format_report(&SimilarityScore::new(0.987654321));
        let expected = "\n=============================================\n\
                        🔊 ADVANCED AUDIO SIMILARITY ANALYSIS\n\
                        =============================================\n\
                        🎧 Similarity Score      : 0.9877\n\
                        🎧 Similarity Percentage : 98.77%\n\
                        =============================================\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_format_report_negative() {
        let report = format_report(&SimilarityScore::new(-0.25));
        assert!(report.contains("Similarity Score      : -0.2500"));
        assert!(report.contains("Similarity Percentage : -25.00%"));
    }

    #[test]
    fn test_format_json() {
        let input = |p: &str| InputSummary {
            path: Some(p.into()),
            duration_secs: 1.0,
            frames: 44,
            mfcc_mean: vec![0.5; 13],
        };
        let summary = ComparisonSummary {
            score: 0.5,
            percentage: 50.0,
            sample_rate: 22050,
            n_mfcc: 13,
            inputs: [input("a.wav"), input("b.wav")],
            analyzed_at: Utc::now(),
        };
        let json = format_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 0.5);
        assert_eq!(value["inputs"][1]["path"], "b.wav");
        assert_eq!(value["inputs"][0]["mfcc_mean"].as_array().unwrap().len(), 13);
    }
}
