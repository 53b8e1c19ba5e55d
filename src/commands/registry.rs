//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Registry mapping command names to handlers
///
/// Multiple command names can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(NicknameSetupHandler));
///
/// if let Some(handler) = registry.get("nickname_setup") {
///     pipeline::execute(handler.as_ref(), &ctx, &mut session).await;
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with every built-in command handler
    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();
        for handler in super::handlers::create_all_handlers() {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler for its declared command names
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names (not unique handlers)
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::CommandContext;
    use crate::core::CommandError;
    use crate::interaction::{AckMode, InteractionSession, Invocation};
    use async_trait::async_trait;

    struct MockHandler {
        names: &'static [&'static str],
    }

    #[async_trait]
    impl SlashCommandHandler for MockHandler {
        fn command_names(&self) -> &'static [&'static str] {
            self.names
        }

        fn ack_mode(&self, _invocation: &Invocation) -> AckMode {
            AckMode::None
        }

        fn authorize(
            &self,
            _ctx: &CommandContext,
            _invocation: &Invocation,
        ) -> Result<(), CommandError> {
            Ok(())
        }

        async fn run(
            &self,
            _ctx: &CommandContext,
            _session: &mut InteractionSession,
        ) -> Result<(), CommandError> {
            Ok(())
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register_multiple_names() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler {
            names: &["one", "two"],
        }));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("one"));
        assert!(registry.contains("two"));
        assert!(registry.get("three").is_none());
    }

    #[test]
    fn test_default_handlers_cover_all_commands() {
        let registry = CommandRegistry::with_default_handlers();
        for name in ["nickname_setup", "recruitment", "save_activity"] {
            assert!(registry.contains(name), "missing handler for {name}");
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_every_defined_command_has_a_handler() {
        let registry = CommandRegistry::with_default_handlers();
        for cmd in crate::commands::slash::create_slash_commands() {
            let name = cmd.0.get("name").and_then(|v| v.as_str()).unwrap();
            assert!(registry.contains(name), "/{name} has no handler");
        }
    }
}
