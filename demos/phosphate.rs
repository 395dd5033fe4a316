//! Example: Phosphate-like Triprotic Acid — Sillén Diagram Data
//!
//! Builds the classic teaching case (pKa = [3.13, 4.76, 6.4], C = 0.1
//! mol/L, `PO4` skeleton, charge −3), assembles the full diagram data
//! including the proton-condition curves, prints a speciation table and
//! exports everything to CSV.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example phosphate
//! ```

use sillen_rs::chemistry::EquilibriumModel;
use sillen_rs::diagram::{DiagramConfig, PhGrid, SillenDiagram, TraceKind};
use sillen_rs::output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter};

/// Prints a titled section banner to stdout.
fn print_section(title: &str) {
    println!("\n═══════════════════════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════════════════════\n");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print_section("Phosphate-like Triprotic Acid — Sillén Diagram Data");

    // ====== Acid definition ======

    let pkas = vec![3.13, 4.76, 6.4];
    let total = 0.1;

    let acid = EquilibriumModel::new(pkas.clone(), total)?
        .with_name("PO4")
        .with_charge(-3);

    println!("Acid    : {}", acid.name());
    println!("pKa     : {:?}", acid.pkas());
    println!("C       : {total} mol/L");
    println!("States  : {}", acid.num_states());

    // ====== Speciation table ======

    print_section("Speciation vs pH");

    println!("{:<6} {:>10} {:>10} {:>10} {:>10}   dominant", "pH",
             acid.label(0)?, acid.label(1)?, acid.label(2)?, acid.label(3)?);
    println!("{:-<62}", "");

    for ph_int in 0..=14 {
        let ph = ph_int as f64;
        let fractions: Vec<f64> = (0..acid.num_states())
            .map(|i| acid.fraction(i, ph))
            .collect::<Result<_, _>>()?;

        let dominant = fractions
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);

        println!(
            "{:<6} {:>10.4} {:>10.4} {:>10.4} {:>10.4}   {}",
            ph, fractions[0], fractions[1], fractions[2], fractions[3],
            acid.label(dominant)?
        );
    }

    // ====== Diagram assembly ======

    print_section("Diagram Assembly");

    let config = DiagramConfig::new(PhGrid::new(0.0, 14.0, 281)?)
        .with_reference_states(vec![0]); // dissolved as H3PO4

    let diagram = SillenDiagram::compute(std::slice::from_ref(&acid), &config)?;

    println!("pH samples : {}", diagram.num_samples());
    println!("Traces     : {}", diagram.traces().len());
    for trace in diagram.traces() {
        println!("  {:<12} {:?}", trace.label, trace.kind);
    }

    // ====== Equilibrium pH from the proton condition ======

    let left = diagram.trace(TraceKind::ProtonExcess).expect("PHG configured");
    let right = diagram.trace(TraceKind::ProtonDeficit).expect("PHG configured");
    let ph_values = diagram.ph();

    for s in 1..diagram.num_samples() {
        let prev = left.values[s - 1] - right.values[s - 1];
        let curr = left.values[s] - right.values[s];
        if prev > 0.0 && curr <= 0.0 {
            println!("\nPHG crossing (equilibrium pH of the H3PO4 solution) ≈ {:.2}", ph_values[s]);
            break;
        }
    }

    // ====== CSV export ======

    print_section("CSV Export");

    let csv_config = CsvConfig::default().with_metadata(CsvMetadata {
        acids: vec![format!("{}: pKa {:?}, C = {} mol/L", acid.name(), pkas, total)],
        grid: Some("pH 0..14, 281 samples".to_string()),
        custom: vec![],
    });

    let path = std::env::temp_dir().join("phosphate_sillen.csv");
    CsvExporter::new(csv_config).export(&diagram, None, path.to_str().unwrap())?;
    println!("csv → {:?}", path);

    println!("\nDone.");
    Ok(())
}
