use console::style;

use crate::pipeline::PipelineOutcome;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_outcome(outcome: &PipelineOutcome) {
    println!("\n{}", style("Release summary:").bold());
    println!("  Version:       v{}", outcome.version);
    println!("  Target binary: {}", outcome.target_binary);
    println!("  Notes page:    {}", outcome.notes_path.display());

    if outcome.decision.is_prerelease {
        println!("  Promotion:     skipped (prerelease)");
    } else if outcome.decision.should_promote {
        println!("  Promotion:     {}", style("newest release, promoting").green());
    } else {
        println!("  Promotion:     a newer release already exists");
    }
}
