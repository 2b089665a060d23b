// src/render/report.rs
//
// Standalone HTML report: four inline SVG charts and the three tables.

use std::f64::consts::TAU;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::core::finalize::FinalizedTables;
use crate::error::BoxError;
use crate::file::write_text_file;
use crate::listing::labels as L;

const CHART_W: f64 = 520.0;
const CHART_H: f64 = 340.0;
const MARGIN: f64 = 48.0;
const SERIES: [&str; 2] = ["#e24a33", "#348abd"];
const PIE: [&str; 11] = [
    "#e24a33", "#348abd", "#988ed5", "#777777", "#fbc15e",
    "#8eba42", "#ffb5b8", "#56b4e9", "#009e73", "#cc79a7", "#cccccc",
];

const STYLE: &str = "\
body { font-family: Verdana, sans-serif; margin: 24px; }
h1 { text-align: center; }
.charts { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; }
table { text-align: center; border-collapse: collapse; margin-bottom: 24px; }
th, td { border: 1px solid; padding: 5px; }
.half { display: inline-block; vertical-align: top; width: 45%; margin: 0 2%; }
.half table { width: 100%; }
";

/// Minimal escaping for text placed in HTML or SVG.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// 0.3164 → "31,64%"
pub fn percent_comma(share: f64) -> String {
    join!(&format!("{:.2}", share * 100.0).replace('.', ","), "%")
}

/* ---------------- Charts ---------------- */

fn svg_open(out: &mut String, title: &str) {
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CHART_W}" height="{CHART_H}" viewBox="0 0 {CHART_W} {CHART_H}" font-size="11">"#
    );
    let _ = write!(
        out,
        r#"<text x="{}" y="18" text-anchor="middle" font-size="14">{}</text>"#,
        CHART_W / 2.0,
        esc(title)
    );
}

fn legend(out: &mut String, labels: &[String]) {
    for (i, label) in labels.iter().enumerate() {
        let y = 30.0 + 14.0 * i as f64;
        let _ = write!(
            out,
            r#"<rect x="{x}" y="{y}" width="10" height="10" fill="{c}"/><text x="{tx}" y="{ty}">{t}</text>"#,
            x = CHART_W - 190.0,
            c = SERIES[i % SERIES.len()],
            tx = CHART_W - 175.0,
            ty = y + 9.0,
            t = esc(label),
        );
    }
}

/// Vertical bars, one group per year, one bar per series.
pub fn grouped_bars(title: &str, years: &[i32], series: &[(String, Vec<f64>)]) -> String {
    let mut out = String::new();
    svg_open(&mut out, title);
    let top = MARGIN;
    let bottom = CHART_H - MARGIN;
    let plot_w = CHART_W - 2.0 * MARGIN;
    let max = series
        .iter()
        .flat_map(|(_, v)| v.iter().copied())
        .fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { (bottom - top) / max } else { 0.0 };
    let slot = plot_w / years.len().max(1) as f64;
    let bar_w = slot * 0.7 / series.len().max(1) as f64;

    let _ = write!(
        out,
        r##"<line x1="{MARGIN}" y1="{bottom}" x2="{}" y2="{bottom}" stroke="#333"/>"##,
        CHART_W - MARGIN
    );
    for (i, year) in years.iter().enumerate() {
        let x0 = MARGIN + slot * i as f64 + slot * 0.15;
        for (k, (_, values)) in series.iter().enumerate() {
            let v = values.get(i).copied().unwrap_or(0.0);
            let h = v * scale;
            let _ = write!(
                out,
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}</title></rect>"#,
                x0 + bar_w * k as f64,
                bottom - h,
                bar_w,
                h,
                SERIES[k % SERIES.len()],
                v
            );
        }
        let cx = MARGIN + slot * (i as f64 + 0.5);
        let _ = write!(
            out,
            r#"<text x="{cx:.1}" y="{:.1}" text-anchor="end" transform="rotate(-90 {cx:.1} {:.1})">{year}</text>"#,
            bottom + 6.0,
            bottom + 6.0
        );
    }
    let labels: Vec<String> = series.iter().map(|(l, _)| l.clone()).collect();
    legend(&mut out, &labels);
    out.push_str("</svg>");
    out
}

/// Horizontal bars, first item on top.
pub fn horizontal_bars(title: &str, items: &[(String, f64)]) -> String {
    let mut out = String::new();
    svg_open(&mut out, title);
    let left = 150.0;
    let plot_w = CHART_W - left - MARGIN / 2.0;
    let row_h = (CHART_H - 2.0 * MARGIN) / items.len().max(1) as f64;
    let max = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { plot_w / max } else { 0.0 };
    for (i, (label, v)) in items.iter().enumerate() {
        let y = MARGIN / 1.5 + row_h * i as f64;
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{}</text><rect x="{left}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="0.8"><title>{}</title></rect>"#,
            left - 6.0,
            y + row_h * 0.6,
            esc(&label.replace(' ', "\u{a0}")),
            y + row_h * 0.1,
            v * scale,
            row_h * 0.8,
            SERIES[1],
            v
        );
    }
    out.push_str("</svg>");
    out
}

/// Pie of the listed shares plus an `Другие` slice for whatever is left.
pub fn pie(title: &str, shares: &[(String, f64)]) -> String {
    let mut slices: Vec<(String, f64)> = shares.to_vec();
    let rest = 1.0 - shares.iter().map(|(_, v)| v).sum::<f64>();
    if rest > 1e-9 {
        slices.push((s!(L::OTHER_REGIONS), rest));
    }

    let mut out = String::new();
    svg_open(&mut out, title);
    let (cx, cy, r) = (CHART_W / 2.0 - 70.0, CHART_H / 2.0 + 10.0, (CHART_H - 2.0 * MARGIN) / 2.0);
    let mut angle = -TAU / 4.0;
    for (i, (label, v)) in slices.iter().enumerate() {
        let color = PIE[i % PIE.len()];
        if *v >= 1.0 - 1e-9 {
            let _ = write!(out, r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{color}"/>"#);
        } else {
            let end = angle + v * TAU;
            let large = u8::from(v * TAU > TAU / 2.0);
            let _ = write!(
                out,
                r#"<path d="M{cx:.1},{cy:.1} L{:.2},{:.2} A{r:.1},{r:.1} 0 {large} 1 {:.2},{:.2} Z" fill="{color}" stroke="white"><title>{}</title></path>"#,
                cx + r * angle.cos(),
                cy + r * angle.sin(),
                cx + r * end.cos(),
                cy + r * end.sin(),
                esc(label)
            );
            angle = end;
        }
        let ly = 34.0 + 14.0 * i as f64;
        let _ = write!(
            out,
            r#"<rect x="{lx}" y="{ly}" width="10" height="10" fill="{color}"/><text x="{tx}" y="{ty}">{t}</text>"#,
            lx = CHART_W - 150.0,
            tx = CHART_W - 135.0,
            ty = ly + 9.0,
            t = esc(label),
        );
    }
    out.push_str("</svg>");
    out
}

/* ---------------- Tables ---------------- */

fn html_table(out: &mut String, headers: &[String], rows: &[Vec<String>]) {
    out.push_str("<table><tr>");
    for h in headers {
        let _ = write!(out, "<th>{}</th>", esc(h));
    }
    out.push_str("</tr>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", esc(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
}

/* ---------------- Document ---------------- */

/// The whole report page.
pub fn report_html(t: &FinalizedTables, profession: &str) -> String {
    let years: Vec<i32> = t.salary_by_year.keys().copied().collect();
    let by_year = |get: &dyn Fn(&i32) -> Option<f64>| -> Vec<f64> {
        years.iter().map(|y| get(y).unwrap_or(0.0)).collect()
    };
    let salary_all = by_year(&|y| t.salary_by_year.get(y).map(|v| *v as f64));
    let salary_prof = by_year(&|y| t.salary_by_year_for_profession.get(y).map(|v| *v as f64));
    let count_all = by_year(&|y| t.count_by_year.get(y).map(|v| *v as f64));
    let count_prof = by_year(&|y| t.count_by_year_for_profession.get(y).map(|v| *v as f64));

    let regions_salary: Vec<(String, f64)> =
        t.salary_by_region_top10.iter().map(|(k, v)| (k.clone(), *v as f64)).collect();
    let regions_share: Vec<(String, f64)> =
        t.share_by_region_top10.iter().map(|(k, v)| (k.clone(), *v)).collect();

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"UTF-8\">\n<title>Report</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n"
    );
    let _ = write!(
        out,
        "<h1>Аналитика по зарплатам и городам для профессии {}</h1>\n<div class=\"charts\">\n",
        esc(profession)
    );
    out.push_str(&grouped_bars(
        "Уровень зарплат по годам",
        &years,
        &[(s!("средняя з/п"), salary_all), (join!("з/п ", profession), salary_prof)],
    ));
    out.push_str(&grouped_bars(
        "Количество вакансий по годам",
        &years,
        &[(s!(L::VACANCY_COUNT), count_all), (L::for_profession(L::VACANCY_COUNT, profession), count_prof)],
    ));
    out.push_str(&horizontal_bars("Уровень зарплат по городам", &regions_salary));
    out.push_str(&pie("Доля вакансий по городам", &regions_share));
    out.push_str("\n</div>\n");

    // years
    let year_sheet = super::sheet::years_sheet(t, profession);
    let _ = write!(out, "<h1>{}</h1>\n", esc(year_sheet.name));
    html_table(&mut out, &year_sheet.headers, &year_sheet.rows);

    // regions
    let _ = write!(out, "\n<h1>{}</h1>\n<div class=\"half\">", esc(crate::config::consts::REGIONS_SHEET));
    let rows: Vec<Vec<String>> = t
        .salary_by_region_top10
        .iter()
        .map(|(k, v)| vec![k.clone(), v.to_string()])
        .collect();
    html_table(&mut out, &[s!(L::REGION), s!(L::SALARY_LEVEL)], &rows);
    out.push_str("</div><div class=\"half\">");
    let rows: Vec<Vec<String>> = t
        .share_by_region_top10
        .iter()
        .map(|(k, v)| vec![k.clone(), percent_comma(*v)])
        .collect();
    html_table(&mut out, &[s!(L::REGION), s!(L::VACANCY_SHARE)], &rows);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Render and write the report; returns the path written.
pub fn write_report(t: &FinalizedTables, profession: &str, path: &Path) -> Result<PathBuf, BoxError> {
    let html = report_html(t, profession);
    let written = write_text_file(path, &html)?;
    logf!("Report: {} bytes -> {}", html.len(), written.display());
    Ok(written)
}
