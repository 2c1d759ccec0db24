//! Listener attachment as a scoped acquisition.

/// Something that can install and remove the engine's event listeners.
pub trait ListenerHost {
    /// Proof of attachment; handing it back to [`ListenerHost::detach`] removes
    /// exactly the listeners it was created for.
    type Registration;
    type Error;

    fn attach(&mut self) -> Result<Self::Registration, Self::Error>;
    fn detach(&mut self, registration: Self::Registration);
}

/// Enabled/disabled switch over a [`ListenerHost`]. Dropping it detaches.
pub struct Bindings<H: ListenerHost> {
    host: H,
    active: Option<H::Registration>,
}

impl<H: ListenerHost> Bindings<H> {
    pub fn new(host: H) -> Self {
        Self { host, active: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    /// Attach listeners. `Ok(false)` when already enabled.
    pub fn enable(&mut self) -> Result<bool, H::Error> {
        if self.active.is_some() {
            return Ok(false);
        }
        self.active = Some(self.host.attach()?);
        Ok(true)
    }

    /// Detach listeners. `false` when already disabled.
    pub fn disable(&mut self) -> bool {
        match self.active.take() {
            Some(reg) => {
                self.host.detach(reg);
                true
            }
            None => false,
        }
    }
}

impl<H: ListenerHost> Drop for Bindings<H> {
    fn drop(&mut self) {
        self.disable();
    }
}
