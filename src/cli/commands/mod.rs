pub mod config;
pub mod expense;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in expense::definitions()
        .into_iter()
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
