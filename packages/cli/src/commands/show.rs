use anyhow::Result;
use clap::Args;

use resumark_content::ResumeStore;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Resume identifier
    #[arg(default_value = "resume_0")]
    pub id: String,

    /// Directory resumes are stored in
    #[arg(short, long, default_value = "resume")]
    pub dir: String,
}

/// Dump the serialized document, whether it comes from disk or the template.
pub fn show(args: ShowArgs) -> Result<()> {
    let store = ResumeStore::new(&args.dir);
    let resume = store.load(&args.id)?;
    println!("{}", resume.to_doc()?.to_json_pretty()?);
    Ok(())
}
