use anyhow::Result;
use clap::Args;
use colored::Colorize;

use resumark_content::ResumeStore;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Resume identifier
    #[arg(default_value = "resume_0")]
    pub id: String,

    /// Directory resumes are stored in
    #[arg(short, long, default_value = "resume")]
    pub dir: String,

    /// Overwrite an existing resume
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs) -> Result<()> {
    let store = ResumeStore::new(&args.dir);
    let path = store.path_for(&args.id);

    if path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            path.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Creating resume from template...".bright_blue().bold());

    let mut resume = resumark_content::ResumeContent::new(&args.id);
    store.save(&mut resume)?;

    println!("  {} Wrote {}", "✓".green(), path.display());
    println!();
    println!("Next: edit the JSON or export it:");
    println!("  resumark export {} --format page", args.id);

    Ok(())
}
