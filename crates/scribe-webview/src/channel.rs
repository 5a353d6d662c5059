//! The physical host -> engine channel.

use scribe_common::ChannelError;

use crate::script::EngineCommand;

/// Fire-and-forget script injection into the engine.
///
/// Scripts are delivered in the order `send` is called. There is no return
/// value; the engine answers, if at all, through its own IPC messages.
pub trait EngineChannel {
    fn send(&self, script: &str) -> Result<(), ChannelError>;

    /// Render and send a command.
    fn send_command(&self, command: &EngineCommand) -> Result<(), ChannelError> {
        self.send(&command.to_script())
    }
}

impl<C: EngineChannel + ?Sized> EngineChannel for &C {
    fn send(&self, script: &str) -> Result<(), ChannelError> {
        (**self).send(script)
    }
}

impl<C: EngineChannel + ?Sized> EngineChannel for Box<C> {
    fn send(&self, script: &str) -> Result<(), ChannelError> {
        (**self).send(script)
    }
}

impl<C: EngineChannel + ?Sized> EngineChannel for std::rc::Rc<C> {
    fn send(&self, script: &str) -> Result<(), ChannelError> {
        (**self).send(script)
    }
}
