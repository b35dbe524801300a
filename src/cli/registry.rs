use std::collections::HashMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
    /// Listed in help only under the primary command.
    pub alias_of: Option<&'static str>,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
            alias_of: None,
        }
    }

    pub fn alias(mut self, primary: &'static str) -> Self {
        self.alias_of = Some(primary);
        self
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    /// Primary commands in registration order.
    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .filter(|entry| entry.alias_of.is_none())
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn aliases_resolve_but_stay_out_of_listing() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("delete", "Delete", "delete <id>", noop));
        registry.register(CommandEntry::new("remove", "Delete", "remove <id>", noop).alias("delete"));

        assert!(registry.handler("remove").is_some());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["delete", "remove"]);
        let listed: Vec<_> = registry.list().iter().map(|entry| entry.name).collect();
        assert_eq!(listed, vec!["delete"]);
    }

    #[test]
    fn duplicate_registration_keeps_single_slot() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("list", "List", "list", noop));
        registry.register(CommandEntry::new("list", "List again", "list", noop));
        assert_eq!(registry.names().count(), 1);
        assert_eq!(registry.get("list").map(|entry| entry.description), Some("List again"));
    }
}
