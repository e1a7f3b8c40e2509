//! Command line surface: one subcommand tree per resource kind.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    CommitteeField, CommitteeView, ContactField, ContactFields, DirectoryClient, ViewState,
};
use shared::{
    domain::{RecordId, SortOrder},
    protocol::{ContactDraft, DirectoryRecord},
};

use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "directory",
    about = "Manage the committee, preceptor and chairperson directories"
)]
pub struct Cli {
    /// Config file; defaults to ./directory.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Overrides the API base URL from config and environment.
    #[arg(long)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub resource: Resource,
}

#[derive(Subcommand, Debug)]
pub enum Resource {
    /// Committee (samiti) entries.
    Committees {
        #[command(subcommand)]
        action: CommitteeAction,
    },
    /// Preceptor (acharya) contacts.
    Preceptors {
        #[command(subcommand)]
        action: ContactAction,
    },
    /// Chairperson (adhyaksh) contacts.
    Chairpersons {
        #[command(subcommand)]
        action: ContactAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CommitteeAction {
    List {
        #[arg(long, value_enum, default_value_t = SortArg::Asc)]
        sort: SortArg,
        #[arg(long, default_value = "")]
        filter: String,
    },
    Add {
        #[arg(long)]
        committee: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        number: String,
        /// Color option value, see `catalog`.
        #[arg(long)]
        color: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        committee: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    Delete {
        id: String,
    },
    /// Lists the accepted committee names and color options.
    Catalog,
}

#[derive(Subcommand, Debug)]
pub enum ContactAction {
    List {
        #[arg(long, default_value = "")]
        filter: String,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        number: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        number: Option<String>,
    },
    Delete {
        id: String,
    },
}

/// Runs one command. Returns false when the outcome was an error.
pub async fn run(client: &DirectoryClient, resource: Resource) -> anyhow::Result<bool> {
    let ok = match resource {
        Resource::Committees { action } => run_committee(client.committee_view()?, action).await,
        Resource::Preceptors { action } => run_contact(client.preceptor_view()?, action).await,
        Resource::Chairpersons { action } => {
            run_contact(client.chairperson_view()?, action).await
        }
    };
    Ok(ok)
}

async fn load_or_report<F: client_core::FormFields>(view: &mut ViewState<F>) -> bool {
    if view.load().await {
        return true;
    }
    if let Some(message) = view.list().error() {
        eprintln!("error: {message}");
    }
    false
}

async fn run_committee(mut view: CommitteeView, action: CommitteeAction) -> bool {
    if let CommitteeAction::Catalog = action {
        println!("{}", render::catalog(&view.form().fields().catalog));
        return true;
    }
    if !load_or_report(&mut view).await {
        return false;
    }

    let ok = match action {
        CommitteeAction::List { sort, filter } => {
            let rows = view.list().visible(&filter, Some(sort.into()));
            println!("{}", render::committees(&rows));
            return true;
        }
        CommitteeAction::Add {
            committee,
            name,
            number,
            color,
        } => {
            view.open_create();
            view.set_field(CommitteeField::Committee, &committee);
            view.set_field(CommitteeField::Name, &name);
            view.set_field(CommitteeField::Number, &number);
            view.set_field(CommitteeField::Color, &color);
            view.submit().await
        }
        CommitteeAction::Edit {
            id,
            committee,
            name,
            number,
            color,
        } => {
            if !view.open_edit(&RecordId::new(id)) {
                render::report(view.latest_notification());
                return false;
            }
            let updates = [
                (CommitteeField::Committee, committee),
                (CommitteeField::Name, name),
                (CommitteeField::Number, number),
                (CommitteeField::Color, color),
            ];
            for (field, value) in updates {
                if let Some(value) = value {
                    view.set_field(field, &value);
                }
            }
            view.submit().await
        }
        CommitteeAction::Delete { id } => view.remove(&RecordId::new(id)).await,
        CommitteeAction::Catalog => true,
    };
    render::report(view.latest_notification());
    ok
}

async fn run_contact<R>(mut view: ViewState<ContactFields<R>>, action: ContactAction) -> bool
where
    R: DirectoryRecord<Draft = ContactDraft>,
{
    if !load_or_report(&mut view).await {
        return false;
    }

    let ok = match action {
        ContactAction::List { filter } => {
            let rows = view.list().filtered(&filter);
            println!("{}", render::contacts(&rows));
            return true;
        }
        ContactAction::Add { name, number } => {
            view.open_create();
            view.set_field(ContactField::Name, &name);
            view.set_field(ContactField::Number, &number);
            view.submit().await
        }
        ContactAction::Edit { id, name, number } => {
            if !view.open_edit(&RecordId::new(id)) {
                render::report(view.latest_notification());
                return false;
            }
            if let Some(name) = name {
                view.set_field(ContactField::Name, &name);
            }
            if let Some(number) = number {
                view.set_field(ContactField::Number, &number);
            }
            view.submit().await
        }
        ContactAction::Delete { id } => view.remove(&RecordId::new(id)).await,
    };
    render::report(view.latest_notification());
    ok
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
