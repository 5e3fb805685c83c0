//! Admin Console command-line front end
//!
//! Manage users, roles and permissions stored as JSON collections.
//!
//! ```sh
//! # List the second page of users matching "admin"
//! admin-console users list --search admin --page 2
//!
//! # Add a user
//! admin-console users add --username alice --email alice@example.com \
//!     --password secret1 --role Admin --status Active
//!
//! # Change one field of an existing role
//! admin-console roles edit 3 --description "Read-only access"
//!
//! # Delete needs an explicit confirmation
//! admin-console permissions delete 4 --yes
//!
//! # Validate config without touching any data
//! admin-console --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use prettytable::{Cell, Row, Table};
use tracing::{error, info};

use admin_console::application::Screen;
use admin_console::config::AppConfig;
use admin_console::domain::{Draft, Entity, RecordId};
use admin_console::{AdminConsole, DomainError};

/// Admin console for users, roles and permissions.
#[derive(Parser, Debug)]
#[command(
    name = "admin-console",
    version,
    about = "Manage users, roles and permissions",
    long_about = "Admin console: create, edit, delete, search and page through \
                  users, roles and permissions.\n\n\
                  Default config: ~/.config/admin-console/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "ADMIN_CONSOLE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the directory holding the stored collections.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage roles
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },
    /// Manage permissions
    Permissions {
        #[command(subcommand)]
        action: PermissionAction,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive search text.
    #[arg(short, long, default_value = "")]
    search: String,

    /// Page number, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    page: u32,
}

#[derive(Args, Debug)]
struct DeleteArgs {
    id: RecordId,

    /// Confirm the deletion.
    #[arg(long)]
    yes: bool,
}

#[derive(Args, Debug)]
struct UserFields {
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    password: Option<String>,
    /// One of Admin, Contributor, Editor, Viewer, Moderator, Developer,
    /// Support, Manager, Tester, Analyst.
    #[arg(long)]
    role: Option<String>,
    /// Active or Inactive.
    #[arg(long)]
    status: Option<String>,
}

#[derive(Args, Debug)]
struct RoleFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Free-text summary of what the role may do.
    #[arg(long)]
    permissions: Option<String>,
}

#[derive(Args, Debug)]
struct PermissionFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    role: Option<String>,
}

#[derive(Subcommand, Debug)]
enum UserAction {
    /// List users
    List(ListArgs),
    /// Add a user
    Add(UserFields),
    /// Edit a user; omitted fields keep their value
    Edit {
        id: RecordId,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Delete a user
    Delete(DeleteArgs),
}

#[derive(Subcommand, Debug)]
enum RoleAction {
    /// List roles
    List(ListArgs),
    /// Add a role
    Add(RoleFields),
    /// Edit a role; omitted fields keep their value
    Edit {
        id: RecordId,
        #[command(flatten)]
        fields: RoleFields,
    },
    /// Delete a role
    Delete(DeleteArgs),
    /// Show role names not used by any role yet
    Available,
}

#[derive(Subcommand, Debug)]
enum PermissionAction {
    /// List permissions
    List(ListArgs),
    /// Add a permission
    Add(PermissionFields),
    /// Edit a permission; omitted fields keep their value
    Edit {
        id: RecordId,
        #[command(flatten)]
        fields: PermissionFields,
    },
    /// Delete a permission
    Delete(DeleteArgs),
}

type Assignments = Vec<(&'static str, String)>;

fn collect_fields<const N: usize>(fields: [(&'static str, Option<String>); N]) -> Assignments {
    fields
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
}

impl UserFields {
    fn assignments(self) -> Assignments {
        collect_fields([
            ("username", self.username),
            ("email", self.email),
            ("password", self.password),
            ("role", self.role),
            ("status", self.status),
        ])
    }
}

impl RoleFields {
    fn assignments(self) -> Assignments {
        collect_fields([
            ("name", self.name),
            ("description", self.description),
            ("permissions", self.permissions),
        ])
    }
}

impl PermissionFields {
    fn assignments(self) -> Assignments {
        collect_fields([
            ("name", self.name),
            ("description", self.description),
            ("role", self.role),
        ])
    }
}

/// Entity-independent form of a subcommand.
enum Operation {
    List(ListArgs),
    Add(Assignments),
    Edit(RecordId, Assignments),
    Delete(DeleteArgs),
}

impl From<UserAction> for Operation {
    fn from(action: UserAction) -> Self {
        match action {
            UserAction::List(args) => Operation::List(args),
            UserAction::Add(fields) => Operation::Add(fields.assignments()),
            UserAction::Edit { id, fields } => Operation::Edit(id, fields.assignments()),
            UserAction::Delete(args) => Operation::Delete(args),
        }
    }
}

impl From<PermissionAction> for Operation {
    fn from(action: PermissionAction) -> Self {
        match action {
            PermissionAction::List(args) => Operation::List(args),
            PermissionAction::Add(fields) => Operation::Add(fields.assignments()),
            PermissionAction::Edit { id, fields } => Operation::Edit(id, fields.assignments()),
            PermissionAction::Delete(args) => Operation::Delete(args),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(admin_console::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref dir) = cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    admin_console::init_tracing(&config);
    match load_error {
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return ExitCode::FAILURE;
            }
            error!("Using default configuration.");
        }
        None => info!("Configuration loaded from {}", config_path.display()),
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Storage     : {:?}", config.storage.backend);
        println!("   Data dir    : {}", config.storage.resolved_data_dir().display());
        println!("   Page size   : {}", config.listing.page_size);
        println!("   User search : {:?}", config.listing.user_search_scope);
        println!("   Log level   : {}", config.logging.level);
        return ExitCode::SUCCESS;
    }

    let Some(command) = cli.command else {
        eprintln!("No command given. Run with --help for usage.");
        return ExitCode::FAILURE;
    };

    let mut console = match AdminConsole::from_config(&config) {
        Ok(console) => console,
        Err(e) => {
            error!("Failed to open storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Users { action } => run(console.users_mut(), action.into()),
        Command::Roles { action } => run_roles(console.roles_mut(), action),
        Command::Permissions { action } => run(console.permissions_mut(), action.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(DomainError::InvalidFields(errors)) => {
            eprintln!("Not saved, please fix:");
            for (field, message) in errors.iter() {
                eprintln!("  {:<12} {}", field, message);
            }
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_roles(
    screen: &mut Screen<admin_console::Role>,
    action: RoleAction,
) -> Result<(), DomainError> {
    let operation = match action {
        RoleAction::Available => {
            for name in screen.available_role_names() {
                println!("{}", name);
            }
            return Ok(());
        }
        RoleAction::List(args) => Operation::List(args),
        RoleAction::Add(fields) => Operation::Add(fields.assignments()),
        RoleAction::Edit { id, fields } => Operation::Edit(id, fields.assignments()),
        RoleAction::Delete(args) => Operation::Delete(args),
    };
    run(screen, operation)
}

fn run<E: Entity>(screen: &mut Screen<E>, operation: Operation) -> Result<(), DomainError> {
    match operation {
        Operation::List(args) => {
            screen.on_search_change(args.search);
            screen.on_page_change(args.page);
            print_page(screen);
        }
        Operation::Add(fields) => {
            screen.begin_add();
            apply_fields(screen, fields)?;
            let saved = screen.on_submit_add()?;
            println!("Created {} #{}", E::NAME, saved.id());
            print_table(&[saved]);
        }
        Operation::Edit(id, fields) => {
            screen.begin_edit(id)?;
            apply_fields(screen, fields)?;
            let saved = screen.on_submit_edit()?;
            println!("Updated {} #{}", E::NAME, saved.id());
            print_table(&[saved]);
        }
        Operation::Delete(args) => {
            let Some(record) = screen.on_request_delete(args.id).cloned() else {
                return Err(DomainError::NotFound {
                    entity: E::NAME,
                    field: "id",
                    value: args.id.to_string(),
                });
            };
            if !args.yes {
                screen.on_cancel_delete();
                println!("About to delete {} #{}:", E::NAME, record.id());
                print_table(&[record]);
                println!("Re-run with --yes to confirm.");
                return Ok(());
            }
            screen.on_confirm_delete()?;
            println!("Deleted {} #{}", E::NAME, record.id());
        }
    }
    Ok(())
}

fn apply_fields<E: Entity>(screen: &mut Screen<E>, fields: Assignments) -> Result<(), DomainError> {
    for (name, value) in fields {
        screen.set_field(name, value)?;
    }
    Ok(())
}

fn print_page<E: Entity>(screen: &Screen<E>) {
    let page = screen.current_page();
    if page.items.is_empty() {
        println!("No {}s available.", E::NAME.to_lowercase());
    } else {
        print_table(&page.items);
    }
    if !screen.search().is_empty() {
        println!("Search: {:?}", screen.search());
    }
    println!(
        "Page {} of {} ({} records){}{}",
        page.page,
        page.total_pages,
        page.total,
        if page.has_previous() { " [prev]" } else { "" },
        if page.has_next() { " [next]" } else { "" },
    );
}

fn print_table<E: Entity>(records: &[E]) {
    record_table(records).printstd();
}

/// One row per record: the id, then each form field in declaration order.
fn record_table<E: Entity>(records: &[E]) -> Table {
    let fields = <E::Draft as Draft>::FIELDS;

    let mut table = Table::new();
    let mut titles = vec![Cell::new("id")];
    titles.extend(fields.iter().map(|f| Cell::new(f)));
    table.set_titles(Row::new(titles));

    for record in records {
        let draft = record.to_draft();
        let mut cells = vec![Cell::new(&record.id().to_string())];
        cells.extend(
            fields
                .iter()
                .map(|f| Cell::new(draft.field(f).unwrap_or_default())),
        );
        table.add_row(Row::new(cells));
    }
    table
}
