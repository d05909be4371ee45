mod chart;
mod report;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use coophours_core::{
    parse_reference_date, parse_timestamp, resolve_data_dir, time, Booking, BookingRepository, Config,
    DonationService, Family, FamilyData, FamilyDataUseCase, FamilyRepository, FileBookingRepository,
    FileDonationRepository, FileFamilyRepository,
};

#[derive(Parser)]
#[command(name = "coophours")]
#[command(about = "Co-op facilitation hours: bookings, donations and dashboards", long_about = None)]
struct Cli {
    /// Data directory (defaults to ~/.coophours)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage families
    Family {
        #[command(subcommand)]
        action: FamilyAction,
    },
    /// Add a parent to a family (usage: parent <family-id> Ada Okafor)
    Parent {
        family: u32,
        first_name: String,
        last_name: String,
    },
    /// Book a time block (usage: book --family 1 --user 2 --start "2024-03-04 09:00" --end "2024-03-04 12:00")
    Book {
        #[arg(long)]
        family: u32,
        #[arg(long)]
        user: u32,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// Scales the block's hours; negative credits time back
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        modifier: f64,
        #[arg(long)]
        room: Option<u32>,
    },
    /// Give hours to another family
    Donate {
        #[arg(long)]
        from: u32,
        #[arg(long)]
        to: u32,
        #[arg(long)]
        hours: f64,
    },
    /// Show a family's weekly hours and history
    Dashboard {
        family: u32,
        /// Reference date: today, +1w, fri, 2024-03-06, "2024-03-06 12:00"
        #[arg(long, default_value = "today")]
        today: String,
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the history chart in the terminal
    Chart {
        family: u32,
        #[arg(long, default_value = "today")]
        today: String,
    },
}

#[derive(clap::Subcommand)]
enum FamilyAction {
    /// Register a family
    Add {
        name: String,
        #[arg(long, default_value_t = 1)]
        children: u32,
    },
    /// List all families
    List,
}

struct Stores {
    config: Config,
    families: FileFamilyRepository,
    bookings: FileBookingRepository,
    donations: DonationService<FileDonationRepository>,
}

impl Stores {
    fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = resolve_data_dir(data_dir)?;
        Ok(Self {
            config: Config::load(&dir)?,
            families: FileFamilyRepository::new(Some(dir.clone()))?,
            bookings: FileBookingRepository::new(Some(dir.clone()))?,
            donations: DonationService::new(FileDonationRepository::new(Some(dir))?),
        })
    }

    fn family_data(&self, family_id: u32, today: &str) -> Result<FamilyData> {
        let family = self.families.get(family_id)?;
        let today = parse_reference_date(today, time::now())?;
        FamilyDataUseCase::new(&self.bookings, &self.donations, &self.config).build(&family, today)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stores = Stores::open(cli.data_dir)?;

    match cli.command {
        Commands::Family { action: FamilyAction::Add { name, children } } => {
            let family = stores.families.create(Family::new(0, name, children))?;
            println!("Family added: {} (ID: {})", family.name, family.id);
            println!("  Weekly goal: {:.2}h", stores.config.goal.goal_for(family.children));
        },
        Commands::Family { action: FamilyAction::List } => {
            let families = stores.families.list()?;
            if families.is_empty() {
                println!("No families found.");
            } else {
                report::print_families(&families, &stores.config);
            }
        },
        Commands::Parent { family, first_name, last_name } => {
            let user = stores.families.add_parent(family, &first_name, &last_name)?;
            println!("Parent added: {} {} (user ID: {})", user.first_name, user.last_name, user.user_id);
        },
        Commands::Book { family, user, start, end, modifier, room } => {
            let fam = stores.families.get(family)?;
            if fam.parent(user).is_none() {
                return Err(anyhow!("User {} is not a parent in family {}", user, family));
            }
            let start = parse_timestamp(&start)?;
            let end = parse_timestamp(&end)?;
            if end <= start {
                return Err(anyhow!("Booking must end after it starts"));
            }

            let mut booking = Booking::new(family, user, start, end).with_modifier(modifier);
            booking.room_id = room;
            let booking = stores.bookings.create(booking)?;
            println!("Booked {:.2}h for {} (ID: {})", booking.weighted_hours(), fam.name, booking.id);
        },
        Commands::Donate { from, to, hours } => {
            let donor = stores.families.get(from)?;
            let donee = stores.families.get(to)?;
            let donation = stores.donations.give(&donor, &donee, hours, time::now())?;
            println!("{} gave {:.2}h to {}", donor.name, donation.amount, donee.name);
        },
        Commands::Dashboard { family, today, json } => {
            let data = stores.family_data(family, &today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                report::print_dashboard(&data);
            }
        },
        Commands::Chart { family, today } => {
            let data = stores.family_data(family, &today)?;
            chart::run(&data)?;
        },
    }
    Ok(())
}
