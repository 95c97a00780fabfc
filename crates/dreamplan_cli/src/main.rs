//! Operator CLI for the family dream planner.
//!
//! # Responsibility
//! - Wire configuration, logging and SQLite storage into `PlannerService`.
//! - Render the fiscal-year timeline as text or JSON.

use anyhow::{anyhow, bail, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use dreamplan_core::db::open_db;
use dreamplan_core::model::fiscal::month_label;
use dreamplan_core::{
    default_start_fy, init_logging, AppConfig, DreamCategory, FamilyMember, FamilyProfile,
    FiscalYearSnapshot, Gender, NewDream, PlannerError, PlannerService, Role,
    SqliteDreamRepository, SqliteProfileRepository,
};
use log::info;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "dreamplan")]
#[command(about = "Family dream planner - fiscal-year timeline of ages, grades and plans", long_about = None)]
struct Cli {
    /// SQLite database path (overrides DREAMPLAN_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files (overrides DREAMPLAN_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Author id stamped on writes (overrides DREAMPLAN_USER_ID)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the core version
    Version,

    #[command(flatten)]
    Planner(PlannerCommand),
}

/// Commands that read or write the planner database.
#[derive(Subcommand)]
enum PlannerCommand {
    /// Manage the family profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Print the 20-year fiscal timeline
    Timeline {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage planned events
    #[command(subcommand)]
    Dream(DreamCommand),

    /// Generate school, coming-of-age and kanreki events from the profile
    Generate,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Replace the profile with a JSON document (`{"startFY": .., "members": [..]}`)
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Print the stored profile as JSON
    Show,
    /// Create a profile with one member; start FY defaults to the current fiscal year
    Init {
        #[arg(long)]
        start_fy: Option<i32>,
        #[command(flatten)]
        member: MemberArgs,
    },
    /// Append a member to the stored profile
    AddMember {
        #[command(flatten)]
        member: MemberArgs,
    },
    /// Remove a member from the stored profile by id
    RemoveMember {
        /// Member id as shown by `profile show`
        id: String,
    },
}

#[derive(Args)]
struct MemberArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    birth_year: i32,
    #[arg(long)]
    birth_month: u8,
    /// parent, child or student
    #[arg(long, default_value = "parent", value_parser = parse_role)]
    role: Role,
    /// male or female
    #[arg(long, value_parser = parse_gender)]
    gender: Option<Gender>,
}

impl MemberArgs {
    fn into_member(self) -> FamilyMember {
        let mut member =
            FamilyMember::new(self.name, self.birth_year, self.birth_month, self.role);
        member.gender = self.gender;
        member
    }
}

#[derive(Subcommand)]
enum DreamCommand {
    /// Add a planned event
    Add {
        #[arg(long)]
        fy: i32,
        #[arg(long, default_value = "4")]
        month: u8,
        /// education, travel, financial, life or career
        #[arg(long, default_value = "life", value_parser = parse_category)]
        category: DreamCategory,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Replace fields of an existing event
    Edit {
        id: Uuid,
        #[arg(long)]
        fy: Option<i32>,
        #[arg(long)]
        month: Option<u8>,
        #[arg(long, value_parser = parse_category)]
        category: Option<DreamCategory>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Delete { id: Uuid },
    /// List all events
    List,
}

fn parse_role(value: &str) -> Result<Role, String> {
    Role::parse(value).ok_or_else(|| format!("unknown role `{value}`"))
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    Gender::parse(value).ok_or_else(|| format!("unknown gender `{value}`"))
}

fn parse_category(value: &str) -> Result<DreamCategory, String> {
    DreamCategory::parse(value).ok_or_else(|| format!("unknown category `{value}`"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = Some(log_dir);
    }
    if let Some(user) = cli.user {
        config.user_id = user;
    }

    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let command = match cli.command {
        Commands::Version => {
            println!("dreamplan_core version={}", dreamplan_core::core_version());
            return Ok(());
        }
        Commands::Planner(command) => command,
    };

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let service = PlannerService::new(
        SqliteProfileRepository::new(&conn),
        SqliteDreamRepository::new(&conn),
    );
    let user_id = config.user_id.as_str();

    match command {
        PlannerCommand::Profile(command) => run_profile(&service, command, user_id)?,
        PlannerCommand::Timeline { json } => {
            let timeline = match service.timeline() {
                Ok(timeline) => timeline,
                Err(PlannerError::MissingProfile) => {
                    bail!("no family profile yet; run `dreamplan profile init` or `profile import` first")
                }
                Err(err) => return Err(err.into()),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                timeline.iter().for_each(print_snapshot);
            }
        }
        PlannerCommand::Dream(command) => run_dream(&service, command, user_id)?,
        PlannerCommand::Generate => {
            let created = service.generate_life_events(user_id)?;
            info!("event=cli_generate module=cli status=ok created={}", created.len());
            for dream in &created {
                println!("{}年度 {:>3} {}", dream.fy, month_label(dream.month), dream.title);
            }
            println!("created {} events", created.len());
        }
    }

    Ok(())
}

type SqlitePlanner<'conn> =
    PlannerService<SqliteProfileRepository<'conn>, SqliteDreamRepository<'conn>>;

fn run_profile(service: &SqlitePlanner<'_>, command: ProfileCommand, user_id: &str) -> Result<()> {
    match command {
        ProfileCommand::Import { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read `{}`", file.display()))?;
            let profile: FamilyProfile = serde_json::from_str(&raw)
                .with_context(|| format!("invalid profile document `{}`", file.display()))?;
            service.save_profile(&profile, Some(user_id))?;
            println!("saved profile with {} members", profile.members.len());
        }
        ProfileCommand::Show => match service.load_profile()? {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => println!("no family profile"),
        },
        ProfileCommand::Init { start_fy, member } => {
            let start_fy = start_fy.unwrap_or_else(|| default_start_fy(Local::now().date_naive()));
            let profile = FamilyProfile::new(start_fy, vec![member.into_member()]);
            service.save_profile(&profile, Some(user_id))?;
            println!("created profile starting FY{start_fy}");
        }
        ProfileCommand::AddMember { member } => {
            let mut profile = service
                .load_profile()?
                .ok_or_else(|| anyhow!("no family profile yet; run `dreamplan profile init` first"))?;
            profile.members.push(member.into_member());
            service.save_profile(&profile, Some(user_id))?;
            println!("profile now has {} members", profile.members.len());
        }
        ProfileCommand::RemoveMember { id } => {
            let mut profile = service
                .load_profile()?
                .ok_or_else(|| anyhow!("no family profile yet"))?;
            let removed = profile
                .remove_member(&id)
                .ok_or_else(|| anyhow!("no member with id `{id}`"))?;
            service.save_profile(&profile, Some(user_id))?;
            println!("removed {} ({})", removed.name, removed.id);
        }
    }
    Ok(())
}

fn run_dream(service: &SqlitePlanner<'_>, command: DreamCommand, user_id: &str) -> Result<()> {
    match command {
        DreamCommand::Add {
            fy,
            month,
            category,
            title,
            description,
        } => {
            let mut new_dream = NewDream::new(fy, month, category, title);
            new_dream.description = description;
            let dream = service.add_dream(new_dream, user_id)?;
            println!("{}", dream.id);
        }
        DreamCommand::Edit {
            id,
            fy,
            month,
            category,
            title,
            description,
        } => {
            let mut dream = service
                .get_dream(id)?
                .ok_or(PlannerError::DreamNotFound(id))?;
            if let Some(fy) = fy {
                dream.fy = fy;
            }
            if let Some(month) = month {
                dream.month = month;
            }
            if let Some(category) = category {
                dream.category = category;
            }
            if let Some(title) = title {
                dream.title = title;
            }
            if description.is_some() {
                dream.description = description;
            }
            service.edit_dream(&dream)?;
            println!("updated {id}");
        }
        DreamCommand::Delete { id } => {
            service.delete_dream(id)?;
            println!("deleted {id}");
        }
        DreamCommand::List => {
            for dream in service.list_dreams()? {
                println!(
                    "{}  {}年度 {:>3} [{}] {}",
                    dream.id,
                    dream.fy,
                    month_label(dream.month),
                    dream.category.label(),
                    dream.title
                );
            }
        }
    }
    Ok(())
}

fn print_snapshot(snapshot: &FiscalYearSnapshot) {
    let members = snapshot
        .members
        .iter()
        .map(|member| match member.grade {
            Some(grade) => format!("{} {}歳 {}", member.name, member.age, grade),
            None => format!("{} {}歳", member.name, member.age),
        })
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{}年度  {}", snapshot.fy, members);

    for dream in &snapshot.year_dreams {
        println!(
            "    {:>3} [{}] {}",
            month_label(dream.month),
            dream.category.label(),
            dream.title
        );
    }
}
