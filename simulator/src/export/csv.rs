use anyhow::Context;
use boardtherm::model::{Field, Grid};
use boardtherm::SimulationRun;
use std::fs;
use std::path::{Path, PathBuf};

/// `x(mm),y(mm),temperature(C)` rows, one per cell, row-major over y then x.
pub fn grid_to_csv(field: &Field, grid: &Grid) -> String {
    let mut rows = Vec::with_capacity(field.len() + 1);
    rows.push("x(mm),y(mm),temperature(C)".to_string());
    for ((j, i), value) in field.indexed_iter() {
        rows.push(format!("{:.3},{:.3},{:.3}", grid.x(i), grid.y(j), value));
    }
    rows.join("\n")
}

/// `time(s),<names...>` rows, one per time sample.
pub fn time_series_csv(time: &[f64], columns: &[(&str, &[f64])]) -> String {
    let mut header = vec!["time(s)".to_string()];
    header.extend(columns.iter().map(|(name, _)| name.to_string()));

    let mut rows = Vec::with_capacity(time.len() + 1);
    rows.push(header.join(","));
    for (idx, t) in time.iter().enumerate() {
        let mut row = vec![format!("{:.3}", t)];
        row.extend(columns.iter().map(|(_, values)| format!("{:.3}", values[idx])));
        rows.push(row.join(","));
    }
    rows.join("\n")
}

/// Writes the three surface tables and three time-series tables into `dir`.
pub fn export_run(run: &SimulationRun, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating export dir {}", dir.display()))?;

    let fields = run.fields();
    let grid = run.grid();
    let time = run.time().as_slice();
    let series = run.series();
    let case: Vec<(&str, &[f64])> = series.iter().map(|s| (s.name.as_str(), &s.case[..])).collect();
    let junction: Vec<(&str, &[f64])> =
        series.iter().map(|s| (s.name.as_str(), &s.junction[..])).collect();
    let power: Vec<(&str, &[f64])> = series.iter().map(|s| (s.name.as_str(), &s.power[..])).collect();

    let files = [
        ("top_surface.csv", grid_to_csv(fields.top(), grid)),
        ("bottom_surface.csv", grid_to_csv(fields.bottom(), grid)),
        ("average_surface.csv", grid_to_csv(fields.avg(), grid)),
        ("case_temperature.csv", time_series_csv(time, &case)),
        ("junction_temperature.csv", time_series_csv(time, &junction)),
        ("power_vs_time.csv", time_series_csv(time, &power)),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        log::info!("exported {}", path.display());
        written.push(path);
    }
    Ok(written)
}
