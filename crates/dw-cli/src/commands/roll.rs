use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dw_mechanics::{Critical, RollOutcome, Shape, Step};

pub fn step(step: i64, crits: bool, seed: Option<u64>) -> Result<(), String> {
    let step = Step::new(step).map_err(|e| e.to_string())?;
    let mut resolver = super::resolver(seed);
    let formula = step.formula();

    if crits {
        let outcome = resolver.roll_step(step, &mut []);
        println!("  {step} ({formula}): {}", outcome.value.to_string().bold());
        print_criticals(&outcome);
    } else {
        let value = resolver.roll_step_without_crits(step);
        println!("  {step} ({formula}): {}", value.to_string().bold());
    }
    Ok(())
}

pub fn distro(mean: f64, shape: &str, crits: bool, seed: Option<u64>) -> Result<(), String> {
    let shape = shape.parse::<Shape>().map_err(|e| e.to_string())?;
    let mut resolver = super::resolver(seed);

    if crits {
        let outcome = resolver
            .roll_distribution(mean, shape, &mut [])
            .map_err(|e| e.to_string())?;
        println!("  {mean} ({shape}): {}", outcome.value.to_string().bold());
        print_criticals(&outcome);
    } else {
        let value = resolver
            .roll_distribution_without_crits(mean, shape)
            .map_err(|e| e.to_string())?;
        println!("  {mean} ({shape}): {}", value.to_string().bold());
    }
    Ok(())
}

pub fn abilities(mean: f64, seed: Option<u64>) -> Result<(), String> {
    let mut resolver = super::resolver(seed);
    let scores = resolver
        .roll_ability_scores(mean)
        .map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Name", "Score"]);
    for t in scores.iter() {
        table.add_row(vec![t.key.clone(), t.name.clone(), t.current().to_string()]);
    }
    println!("{table}");
    Ok(())
}

fn print_criticals(outcome: &RollOutcome) {
    let label = match outcome.classification() {
        Critical::Normal => return,
        Critical::Success => "critical success".green(),
        Critical::Failure => "critical failure".red(),
    };
    println!(
        "  {label} ({} success{}, {} failure{})",
        outcome.successes,
        if outcome.successes == 1 { "" } else { "es" },
        outcome.failures,
        if outcome.failures == 1 { "" } else { "s" },
    );
}
