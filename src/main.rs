use agence_console::console::{self, ConsoleState};
use agence_console::enums::{CompteStatus, CompteType, DocumentStatus};
use agence_console::models::{AgenceRequest, CarteRequest, CompteQuery, CompteRequest, PendingQuery};
use agence_console::{AppError, Config, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agence-console", about = "Console d'administration agence", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Se connecter au service agence
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Se déconnecter et effacer la session locale
    Logout,
    /// Afficher la session courante
    Session,
    /// Revue des documents d'identité
    #[command(subcommand)]
    Documents(DocumentCommand),
    /// Gestion des agences
    #[command(subcommand)]
    Agences(AgenceCommand),
    /// Gestion des comptes
    #[command(subcommand)]
    Comptes(CompteCommand),
    /// Gestion des cartes
    #[command(subcommand)]
    Cartes(CarteCommand),
}

#[derive(Subcommand)]
enum DocumentCommand {
    /// Lister les documents en attente
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<DocumentStatus>,
        #[arg(long = "type")]
        document_type: Option<String>,
    },
    /// Afficher le dossier complet d'un document
    Review { document_id: String },
    /// Approuver un document
    Approve {
        document_id: String,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Rejeter un document (motif obligatoire)
    Reject {
        document_id: String,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Statistiques de traitement
    Stats {
        #[arg(long)]
        period: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Approuver plusieurs documents
    BulkApprove {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Rejeter plusieurs documents
    BulkReject {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        comment: Option<String>,
    },
}

#[derive(Subcommand)]
enum AgenceCommand {
    /// Lister les agences
    List {
        /// Filtre local sur le code, le nom ou la ville
        #[arg(long)]
        filter: Option<String>,
    },
    /// Afficher une agence
    Show { agence_id: String },
    /// Créer une agence
    Add(AgenceArgs),
    /// Mettre à jour une agence
    Update {
        agence_id: String,
        #[command(flatten)]
        agence: AgenceArgs,
    },
    /// Supprimer une agence
    Delete { agence_id: String },
}

#[derive(Args)]
struct AgenceArgs {
    #[arg(long)]
    code: String,
    #[arg(long)]
    nom: String,
    #[arg(long, default_value = "")]
    adresse: String,
    #[arg(long)]
    ville: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    telephone: String,
    #[arg(long, default_value_t = 0.0)]
    capital: f64,
    #[arg(long, default_value_t = 0.0)]
    solde_disponible: f64,
    #[arg(long, default_value_t = 0.0)]
    limite_jour: f64,
    #[arg(long, default_value_t = 0.0)]
    limite_mois: f64,
}

impl From<AgenceArgs> for AgenceRequest {
    fn from(args: AgenceArgs) -> Self {
        Self {
            code_agence: args.code,
            nom: args.nom,
            adresse: args.adresse,
            ville: args.ville,
            email: args.email,
            telephone: args.telephone,
            capital: args.capital,
            solde_disponible: args.solde_disponible,
            limite_daily_transactions: args.limite_jour,
            limite_monthly_transactions: args.limite_mois,
        }
    }
}

#[derive(Subcommand)]
enum CompteCommand {
    /// Lister les comptes
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 50)]
        size: u32,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<CompteStatus>,
        #[arg(long = "type")]
        compte_type: Option<CompteType>,
    },
    /// Afficher un compte
    Show { compte_id: String },
    /// Créer un compte
    Create(CompteArgs),
    /// Mettre à jour un compte
    Update {
        compte_id: String,
        #[command(flatten)]
        compte: CompteArgs,
    },
    /// Bloquer un compte
    Block {
        compte_id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Débloquer un compte
    Unblock { compte_id: String },
    /// Fermer un compte
    Close { compte_id: String },
}

#[derive(Args)]
struct CompteArgs {
    #[arg(long)]
    numero: u64,
    #[arg(long)]
    client: String,
    #[arg(long)]
    agence: String,
    #[arg(long, default_value_t = 0.0)]
    solde: f64,
    #[arg(long, default_value = "STANDARD")]
    compte_type: CompteType,
    #[arg(long, default_value = "PENDING")]
    status: CompteStatus,
    #[arg(long, default_value_t = 0.0)]
    retrait_jour: f64,
    #[arg(long, default_value_t = 0.0)]
    virement_jour: f64,
    #[arg(long, default_value_t = 0.0)]
    operations_mois: f64,
}

impl From<CompteArgs> for CompteRequest {
    fn from(args: CompteArgs) -> Self {
        Self {
            numero_compte: args.numero,
            id_client: args.client,
            id_agence: args.agence,
            solde: args.solde,
            compte_type: args.compte_type,
            status: args.status,
            limite_daily_withdrawal: args.retrait_jour,
            limite_daily_transfer: args.virement_jour,
            limite_monthly_operations: args.operations_mois,
        }
    }
}

#[derive(Subcommand)]
enum CarteCommand {
    /// Créer une carte pour un compte existant
    Create {
        compte_id: String,
        #[arg(long)]
        carte_type: agence_console::enums::CarteType,
        #[arg(long)]
        porteur: String,
        #[arg(long)]
        pin: String,
        #[arg(long, default_value_t = 0.0)]
        achat_jour: f64,
        #[arg(long, default_value_t = 0.0)]
        retrait_jour: f64,
        #[arg(long, default_value_t = 0.0)]
        limite_mois: f64,
        #[arg(long)]
        contactless: bool,
        #[arg(long)]
        international: bool,
        #[arg(long)]
        online: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agence_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().map_err(|e| AppError::Config(e.to_string()))?;
    let state = ConsoleState::new(&config)?;

    match cli.command {
        Command::Login { username, password } => {
            let user = state.auth.login(&username, &password).await?;
            println!("Connecté en tant que {} ({}).", user.username, user.role);
            Ok(())
        }
        Command::Logout => {
            state.auth.logout().await?;
            println!("Session terminée.");
            Ok(())
        }
        Command::Session => {
            match state.auth.bootstrap().await {
                Some(user) => println!("Session active: {} ({}).", user.username, user.role),
                None => println!("Aucune session active."),
            }
            Ok(())
        }
        Command::Documents(cmd) => run_documents(&state, cmd).await,
        Command::Agences(cmd) => run_agences(&state, cmd).await,
        Command::Comptes(cmd) => run_comptes(&state, cmd).await,
        Command::Cartes(cmd) => run_cartes(&state, cmd).await,
    }
}

async fn run_documents(state: &ConsoleState, cmd: DocumentCommand) -> Result<()> {
    match cmd {
        DocumentCommand::List {
            page,
            size,
            search,
            status,
            document_type,
        } => {
            let query = PendingQuery {
                page,
                size,
                search,
                status: status.or(Some(DocumentStatus::Pending)),
                document_type,
                ..Default::default()
            };
            console::documents::handle_list(state, query).await
        }
        DocumentCommand::Review { document_id } => {
            console::documents::handle_review(state, &document_id).await
        }
        DocumentCommand::Approve {
            document_id,
            comment,
        } => console::documents::handle_approve(state, &document_id, comment).await,
        DocumentCommand::Reject {
            document_id,
            reason,
            comment,
        } => console::documents::handle_reject(state, &document_id, &reason, comment).await,
        DocumentCommand::Stats { period, start, end } => {
            console::documents::handle_statistics(
                state,
                period.as_deref(),
                start.as_deref(),
                end.as_deref(),
            )
            .await
        }
        DocumentCommand::BulkApprove { ids, comment } => {
            console::documents::handle_bulk_approve(state, &ids, comment.as_deref()).await
        }
        DocumentCommand::BulkReject {
            ids,
            reason,
            comment,
        } => {
            console::documents::handle_bulk_reject(state, &ids, &reason, comment.as_deref()).await
        }
    }
}

async fn run_agences(state: &ConsoleState, cmd: AgenceCommand) -> Result<()> {
    match cmd {
        AgenceCommand::List { filter } => {
            console::agences::handle_list(state, filter.as_deref()).await
        }
        AgenceCommand::Show { agence_id } => console::agences::handle_show(state, &agence_id).await,
        AgenceCommand::Add(args) => console::agences::handle_create(state, args.into()).await,
        AgenceCommand::Update { agence_id, agence } => {
            console::agences::handle_update(state, &agence_id, agence.into()).await
        }
        AgenceCommand::Delete { agence_id } => {
            console::agences::handle_delete(state, &agence_id).await
        }
    }
}

async fn run_comptes(state: &ConsoleState, cmd: CompteCommand) -> Result<()> {
    match cmd {
        CompteCommand::List {
            page,
            size,
            search,
            status,
            compte_type,
        } => {
            let query = CompteQuery {
                page,
                size,
                search,
                status,
                compte_type,
            };
            console::comptes::handle_list(state, query).await
        }
        CompteCommand::Show { compte_id } => console::comptes::handle_show(state, &compte_id).await,
        CompteCommand::Create(args) => console::comptes::handle_create(state, args.into()).await,
        CompteCommand::Update { compte_id, compte } => {
            console::comptes::handle_update(state, &compte_id, compte.into()).await
        }
        CompteCommand::Block { compte_id, reason } => {
            console::comptes::handle_block(state, &compte_id, reason.as_deref()).await
        }
        CompteCommand::Unblock { compte_id } => {
            console::comptes::handle_unblock(state, &compte_id).await
        }
        CompteCommand::Close { compte_id } => {
            console::comptes::handle_close(state, &compte_id).await
        }
    }
}

async fn run_cartes(state: &ConsoleState, cmd: CarteCommand) -> Result<()> {
    match cmd {
        CarteCommand::Create {
            compte_id,
            carte_type,
            porteur,
            pin,
            achat_jour,
            retrait_jour,
            limite_mois,
            contactless,
            international,
            online,
        } => {
            let request = CarteRequest {
                compte_id,
                carte_type,
                nom_porteur: porteur,
                code_pin: pin,
                limite_daily_purchase: achat_jour,
                limite_daily_withdrawal: retrait_jour,
                limite_monthly: limite_mois,
                contactless,
                international_payments: international,
                online_payments: online,
            };
            console::comptes::handle_create_carte(state, request).await
        }
    }
}
