use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::analysis::{NutrientResult, NutritionReport};
use crate::meal_log::SlotSummary;
use crate::nutrients::NutrientKey;
use crate::recipes::{Favorites, FeaturedRecipe, Recipe};

const BAR_WIDTH: usize = 20;

/// Amounts are shown to one decimal place, without a trailing `.0`.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

fn progress_bar(percentage: u8) -> String {
    let filled = percentage as usize * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn render_meal_summary(summary: &[SlotSummary]) -> String {
    let mut out = String::new();
    for slot in summary {
        let names = if slot.names.is_empty() {
            "未入力".to_string()
        } else {
            slot.names.join(", ")
        };
        let _ = writeln!(out, "  {} ({}): {}", slot.slot, slot.count(), names);
    }
    out
}

pub fn render_analysis(report: &NutritionReport, deficient: &[(NutrientKey, NutrientResult)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "栄養分析結果");
    let _ = writeln!(out);
    for (_, result) in report.iter() {
        let _ = writeln!(
            out,
            "  {:<12} {:>8} / {:<8} {} {:>3}%",
            result.name,
            format!("{}{}", format_amount(result.current), result.unit),
            format!("{}{}", format_amount(result.target), result.unit),
            progress_bar(result.percentage),
            result.percentage
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "不足している栄養素");
    for (_, result) in deficient {
        let _ = writeln!(out, "  - {} ({}% 充足)", result.name, result.percentage);
    }
    out
}

pub fn render_recommendations(
    deficient: &[(NutrientKey, NutrientResult)],
    recipes: &[&Recipe],
    favorites: &Favorites,
) -> String {
    let mut out = String::new();
    let names: Vec<&str> = deficient.iter().map(|(_, result)| result.name).collect();
    let _ = writeln!(out, "おすすめレシピ ({})", names.join(", "));
    let _ = writeln!(out);
    for recipe in recipes {
        let heart = if favorites.contains(recipe.id) { "♥" } else { "♡" };
        let _ = writeln!(out, "{} [{}] {}", heart, recipe.id, recipe.title);
        let _ = writeln!(out, "    {} / 調理時間: {}", recipe.nutrients.join(", "), recipe.time);
        let _ = writeln!(out, "    {}", recipe.url);
    }
    out
}

pub fn render_featured(recipe: &FeaturedRecipe, index: usize, len: usize) -> String {
    format!("({}/{}) {} - {}", index + 1, len, recipe.title, recipe.url)
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    key: &'a str,
    name: &'a str,
    current: f64,
    target: f64,
    unit: &'a str,
    percentage: u8,
}

/// Writes one CSV row per nutrient, in table order.
pub fn write_report_csv<W: Write>(report: &NutritionReport, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (key, result) in report.iter() {
        wtr.serialize(CsvRow {
            key: key.as_str(),
            name: result.name,
            current: result.current,
            target: result.target,
            unit: result.unit,
            percentage: result.percentage,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_report_csv(report: &NutritionReport, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV export file at {:?}", path))?;
    write_report_csv(report, file)
        .with_context(|| format!("Failed to write CSV export to {:?}", path))
}
