use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clientele")]
#[command(about = "Customer and address directory for the command line")]
#[command(long_about = None, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir, or $CLIENTELE_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print raw result envelopes as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number (zero-indexed)
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Page size (defaults to the configured page size)
    #[arg(long)]
    pub size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// Sort field (id, firstName, lastName, email, phone, createdAt)
    #[arg(long, default_value = "lastName")]
    pub sort: String,

    /// Sort direction (asc, desc)
    #[arg(long, default_value = "asc")]
    pub dir: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List customers
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Show one customer
    Get {
        /// Customer id
        id: u64,
    },

    /// Create a customer (gets an empty placeholder address)
    #[command(alias = "n")]
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// Update customer fields
    Update {
        /// Customer id
        id: u64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete {
        /// Customer id
        id: u64,
    },

    /// Search by name, email, or phone
    Search {
        /// Search term (empty lists everyone)
        term: Option<String>,
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Find customers by address (city/state/pincode substrings)
    Find {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        pincode: Option<String>,
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        sort: SortArgs,
    },

    /// List a customer's addresses
    Addresses {
        /// Customer id
        customer_id: u64,
    },

    /// Address operations
    #[command(subcommand)]
    Address(AddressCommands),

    /// Show or set configuration (pageSize, latencyMs)
    Config {
        /// Config key to read or set
        key: Option<String>,
        /// New value for the key
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddressCommands {
    /// Show one address
    Get {
        /// Address id
        id: u64,
    },

    /// Add an address to a customer
    Add {
        /// Customer id
        customer_id: u64,
        #[arg(long)]
        street: String,
        #[arg(long)]
        street2: Option<String>,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        pincode: String,
        #[arg(long)]
        country: String,
    },

    /// Update address fields
    Update {
        /// Address id
        id: u64,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        street2: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        pincode: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },

    /// Delete an address (a customer keeps at least one)
    Delete {
        /// Address id
        id: u64,
    },
}
