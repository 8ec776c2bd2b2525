use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;

use resumark_content::{ResumeContent, ResumeStore};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Resume identifier
    #[arg(default_value = "resume_0")]
    pub id: String,

    /// Directory resumes are stored in
    #[arg(short, long, default_value = "resume")]
    pub dir: String,

    /// Output format (html, markdown, page)
    #[arg(short, long, default_value = "page")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn export(args: ExportArgs) -> Result<()> {
    let store = ResumeStore::new(&args.dir);
    let resume = store.load(&args.id)?;

    let rendered = render(&resume, &args.format)?;

    match &args.out {
        Some(path) => {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs::create_dir_all(dir)?;
                }
            }
            fs::write(path, rendered)?;
            println!("  {} {} → {}", "✓".green(), args.id, path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render(resume: &ResumeContent, format: &str) -> Result<String> {
    match format {
        "html" => Ok(resume.as_html()?),
        "markdown" | "md" => Ok(resume.as_markdown()?),
        "page" => Ok(resume.as_page()?),
        other => Err(anyhow!(
            "Unknown format: {}. Use: html, markdown, or page",
            other
        )),
    }
}
