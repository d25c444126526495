//! Warung Kencana CLI - shop front and back office in one binary.
//!
//! # Usage
//!
//! ```bash
//! # Seed the catalog and demo accounts
//! warung seed
//!
//! # Browse and shop
//! warung menu
//! warung login -e test@example.com -p password
//! warung cart add ayam-geprek-original --quantity 2
//! warung checkout --delivery regular --payment cod
//!
//! # Back office
//! warung admin orders --status Diproses
//! warung admin set-status <order-id> Dikirim
//! warung admin stats
//! ```
//!
//! State lives in the directory named by `WARUNG_DATA_DIR` (default
//! `warung-data`); every subcommand opens the same store, so the shop and
//! the back office always see each other's writes.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "warung")]
#[command(author, version, about = "Warung Kencana storefront and back office")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the catalog and demo accounts
    Seed,
    /// List the menu
    Menu {
        /// Only this menu section
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Register a new account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Login email
        #[arg(short, long)]
        email: String,

        /// Password (min 6 characters)
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        confirm: String,
    },
    /// Sign in
    Login {
        /// Login email
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out (also clears the cart)
    Logout,
    /// Show the current session
    Whoami,
    /// Edit the signed-in profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order from the current cart
    Checkout {
        /// Delivery tier: regular or express
        #[arg(long, default_value = "regular")]
        delivery: String,

        /// Payment method: bank-transfer-bca, bank-transfer-mandiri, cod
        #[arg(long, default_value = "bank-transfer-bca")]
        payment: String,

        /// Notes to the kitchen or courier
        #[arg(long, default_value = "")]
        notes: String,

        /// Override the recipient name from the profile
        #[arg(long)]
        name: Option<String>,

        /// Override the phone number from the profile
        #[arg(long)]
        phone: Option<String>,

        /// Override the street address from the profile
        #[arg(long)]
        address: Option<String>,

        /// Override the city from the profile
        #[arg(long)]
        city: Option<String>,

        /// Override the postal code from the profile
        #[arg(long)]
        postal_code: Option<String>,
    },
    /// Show orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Read and write reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Message the shop
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Back-office operations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Update profile fields (only the flags you pass change)
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New street address
        #[arg(long)]
        address: Option<String>,

        /// New city
        #[arg(long)]
        city: Option<String>,

        /// New postal code
        #[arg(long)]
        postal_code: Option<String>,

        /// New profile label (e.g. Mahasiswa)
        #[arg(long)]
        profile_status: Option<String>,
    },
    /// Change the password
    ChangePassword {
        /// Current password
        #[arg(long)]
        current: String,

        /// New password (min 8 characters)
        #[arg(long)]
        new: String,

        /// New password confirmation
        #[arg(long)]
        confirm: String,
    },
    /// Delete the account and sign out
    DeleteAccount,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a product
    Add {
        /// Product ID (see `warung menu`)
        product: String,

        /// How many to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a line (0 removes it)
    Set {
        /// Product ID
        product: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line
    Remove {
        /// Product ID
        product: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List all orders
    List,
    /// Show one order
    Show {
        /// Order ID
        id: String,
    },
    /// Show the most recent order (the post-checkout summary)
    Latest,
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List reviews
    List {
        /// Case-insensitive text filter
        #[arg(long)]
        search: Option<String>,

        /// Only this star rating
        #[arg(long)]
        rating: Option<u8>,

        /// Sort: newest, oldest, rating-high, rating-low
        #[arg(long, default_value = "newest")]
        sort: String,
    },
    /// Write a review (requires a completed order with the product)
    Add {
        /// Product ID
        product: String,

        /// Star rating, 1-5
        #[arg(short, long)]
        rating: u8,

        /// Review text
        #[arg(short, long)]
        comment: String,

        /// Photo references
        #[arg(long)]
        photo: Vec<String>,
    },
    /// Mark a review as helpful
    Vote {
        /// Review ID
        review: String,
    },
}

#[derive(Subcommand)]
enum ChatAction {
    /// Show your conversation with the shop
    Show,
    /// Send a message
    Send {
        /// Message text
        text: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List orders, optionally by status
    Orders {
        /// Only this status: Diproses, Dikirim, Selesai, Dibatalkan
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Move an order to a new status
    SetStatus {
        /// Order ID
        id: String,

        /// Target status
        status: String,

        /// Skip the pipeline check (manual correction)
        #[arg(long)]
        force: bool,
    },
    /// Manage the catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage accounts
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Reply to customer messages
    Chat {
        #[command(subcommand)]
        action: AdminChatAction,
    },
    /// Show dashboard stats
    Stats,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List the catalog
    List,
    /// Add a product
    Add {
        /// Display name (the ID is its slug)
        #[arg(short, long)]
        name: String,

        /// One-line description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Unit price in whole rupiah
        #[arg(short, long)]
        price: u64,

        /// Menu section
        #[arg(short, long)]
        category: String,

        /// Image reference (defaults to the slug)
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Edit a product (only the flags you pass change)
    Update {
        /// Product ID
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New unit price in whole rupiah
        #[arg(long)]
        price: Option<u64>,

        /// New menu section
        #[arg(long)]
        category: Option<String>,

        /// New image reference
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a product
    Delete {
        /// Product ID
        id: String,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List accounts, optionally filtered
    List {
        /// Case-insensitive name/email filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Change an account's role
    SetRole {
        /// User ID
        id: String,

        /// Role: customer, admin, collaborator
        role: String,
    },
    /// Change an account's status label
    SetStatus {
        /// User ID
        id: String,

        /// Status: Aktif, Nonaktif, "Verifikasi Tertunda"
        status: String,
    },
    /// Delete an account
    Delete {
        /// User ID
        id: String,
    },
}

#[derive(Subcommand)]
enum AdminChatAction {
    /// List all threads
    List,
    /// Reply to a thread
    Reply {
        /// Thread ID
        thread: String,

        /// Message text
        text: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_lines)] // one arm per subcommand, all trivial dispatch
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run()?,
        Commands::Menu { category } => commands::catalog::menu(category.as_deref())?,
        Commands::Register {
            name,
            email,
            password,
            confirm,
        } => commands::auth::register(name, &email, &password, &confirm)?,
        Commands::Login { email, password } => commands::auth::login(&email, &password)?,
        Commands::Logout => commands::auth::logout()?,
        Commands::Whoami => commands::auth::whoami()?,
        Commands::Profile { action } => match action {
            ProfileAction::Update {
                name,
                phone,
                address,
                city,
                postal_code,
                profile_status,
            } => commands::auth::update_profile(
                name,
                phone,
                address,
                city,
                postal_code,
                profile_status,
            )?,
            ProfileAction::ChangePassword {
                current,
                new,
                confirm,
            } => commands::auth::change_password(&current, &new, &confirm)?,
            ProfileAction::DeleteAccount => commands::auth::delete_account()?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add { product, quantity } => commands::cart::add(&product, quantity)?,
            CartAction::Set { product, quantity } => {
                commands::cart::set_quantity(&product, quantity)?;
            }
            CartAction::Remove { product } => commands::cart::remove(&product)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Checkout {
            delivery,
            payment,
            notes,
            name,
            phone,
            address,
            city,
            postal_code,
        } => commands::checkout::submit(commands::checkout::CheckoutArgs {
            delivery,
            payment,
            notes,
            name,
            phone,
            address,
            city,
            postal_code,
        })?,
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list()?,
            OrdersAction::Show { id } => commands::orders::show(&id)?,
            OrdersAction::Latest => commands::orders::latest()?,
        },
        Commands::Review { action } => match action {
            ReviewAction::List {
                search,
                rating,
                sort,
            } => commands::reviews::list(search, rating, &sort)?,
            ReviewAction::Add {
                product,
                rating,
                comment,
                photo,
            } => commands::reviews::add(&product, rating, comment, photo)?,
            ReviewAction::Vote { review } => commands::reviews::vote(&review)?,
        },
        Commands::Chat { action } => match action {
            ChatAction::Show => commands::chat::show()?,
            ChatAction::Send { text } => commands::chat::send(&text)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Orders { status } => commands::admin::orders(status.as_deref())?,
            AdminAction::SetStatus { id, status, force } => {
                commands::admin::set_status(&id, &status, force)?;
            }
            AdminAction::Products { action } => match action {
                ProductsAction::List => commands::admin::products_list()?,
                ProductsAction::Add {
                    name,
                    description,
                    price,
                    category,
                    image,
                } => commands::admin::products_add(name, description, price, category, image)?,
                ProductsAction::Update {
                    id,
                    name,
                    description,
                    price,
                    category,
                    image,
                } => commands::admin::products_update(
                    &id,
                    name,
                    description,
                    price,
                    category,
                    image,
                )?,
                ProductsAction::Delete { id } => commands::admin::products_delete(&id)?,
            },
            AdminAction::Users { action } => match action {
                UsersAction::List { search } => commands::admin::users_list(search.as_deref())?,
                UsersAction::SetRole { id, role } => commands::admin::users_set_role(&id, &role)?,
                UsersAction::SetStatus { id, status } => {
                    commands::admin::users_set_status(&id, &status)?;
                }
                UsersAction::Delete { id } => commands::admin::users_delete(&id)?,
            },
            AdminAction::Chat { action } => match action {
                AdminChatAction::List => commands::admin::chat_list()?,
                AdminChatAction::Reply { thread, text } => {
                    commands::admin::chat_reply(&thread, &text)?;
                }
            },
            AdminAction::Stats => commands::admin::stats()?,
        },
    }
    Ok(())
}
