//! # Menu Selections
//!
//! The interactive loop only ever sees one line of text per turn. That text is
//! trimmed and mapped onto [`MenuCommand`]; anything that is not one of the ten
//! known keys becomes [`MenuCommand::Unrecognized`] and carries the original
//! text so it can be logged.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    List,
    Remove,
    Statistics,
    Divide,
    Clear,
    Sort,
    Evens,
    Export,
    Exit,
    Unrecognized(String),
}

/// Menu entries in display order.
static MENU_ITEMS: [MenuCommand; 10] = [
    MenuCommand::Add,
    MenuCommand::List,
    MenuCommand::Remove,
    MenuCommand::Statistics,
    MenuCommand::Divide,
    MenuCommand::Clear,
    MenuCommand::Sort,
    MenuCommand::Evens,
    MenuCommand::Export,
    MenuCommand::Exit,
];

pub const MENU_TITLE: &str = "--- Menu ---";
pub const MENU_PROMPT: &str = "Digite sua escolha: ";

impl MenuCommand {
    pub fn items() -> &'static [MenuCommand] {
        &MENU_ITEMS
    }

    /// The text the user types to pick this entry.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            MenuCommand::Add => Some("1"),
            MenuCommand::List => Some("2"),
            MenuCommand::Remove => Some("3"),
            MenuCommand::Statistics => Some("4"),
            MenuCommand::Divide => Some("5"),
            MenuCommand::Clear => Some("6"),
            MenuCommand::Sort => Some("7"),
            MenuCommand::Evens => Some("8"),
            MenuCommand::Export => Some("9"),
            MenuCommand::Exit => Some("0"),
            MenuCommand::Unrecognized(_) => None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            MenuCommand::Add => Some("Adicionar número"),
            MenuCommand::List => Some("Listar números"),
            MenuCommand::Remove => Some("Remover por índice"),
            MenuCommand::Statistics => Some("Estatísticas"),
            MenuCommand::Divide => Some("Divisão segura"),
            MenuCommand::Clear => Some("Limpar lista"),
            MenuCommand::Sort => Some("Ordenar lista"),
            MenuCommand::Evens => Some("Exibir apenas números pares"),
            MenuCommand::Export => Some("Exportar para arquivo de texto"),
            MenuCommand::Exit => Some("Sair"),
            MenuCommand::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for MenuCommand {
    fn from(selection: &str) -> Self {
        let selection = selection.trim();
        MENU_ITEMS
            .iter()
            .find(|item| item.key() == Some(selection))
            .cloned()
            .unwrap_or_else(|| MenuCommand::Unrecognized(selection.to_string()))
    }
}

/// The numbered lines of the menu, one per entry, without title or prompt.
pub fn menu_lines() -> Vec<String> {
    MenuCommand::items()
        .iter()
        .filter_map(|item| Some(format!("{}. {}", item.key()?, item.label()?)))
        .collect()
}
