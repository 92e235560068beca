//! Registration and teardown of the device node.
//!
//! [`Lifecycle`] owns everything the OS hands back while the device is
//! registered: the device number range and the class handle. It is created at
//! module start and dropped at module stop. The read path never sees it.

use crate::error::LifecycleError;

/// Name of the device node (`/dev/tarot`).
pub const DEVICE_NAME: &str = "tarot";

/// Name of the device class.
pub const CLASS_NAME: &str = "tarot_cls";

/// First minor number requested.
pub const FIRST_MINOR: u32 = 1;

/// Number of minor numbers reserved, one per card of a full deck.
pub const DEVICE_COUNT: u32 = 78;

/// A major/minor device number pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceNumber {
    /// Major number.
    pub major: u32,
    /// Minor number.
    pub minor: u32,
}

/// The OS calls needed to publish a character device.
///
/// Fallible calls return the OS error code on failure.
pub trait Registrar {
    /// Handle for a created device class.
    type Class;

    /// Allocates `count` device numbers starting at minor `first_minor`.
    ///
    /// # Errors
    ///
    /// Returns the OS error code.
    fn alloc_region(
        &mut self,
        first_minor: u32,
        count: u32,
        name: &str,
    ) -> Result<DeviceNumber, i32>;

    /// Releases `count` device numbers starting at `first`.
    fn unregister_region(&mut self, first: DeviceNumber, count: u32);

    /// Creates a device class.
    ///
    /// # Errors
    ///
    /// Returns the OS error code.
    fn create_class(&mut self, name: &str) -> Result<Self::Class, i32>;

    /// Destroys a device class.
    fn destroy_class(&mut self, class: Self::Class);

    /// Creates the device node under `class`.
    ///
    /// # Errors
    ///
    /// Returns the OS error code.
    fn create_node(
        &mut self,
        class: &Self::Class,
        number: DeviceNumber,
        name: &str,
    ) -> Result<(), i32>;

    /// Removes the device node.
    fn destroy_node(&mut self, class: &Self::Class, number: DeviceNumber);

    /// Adds the character device, wiring its read handler.
    ///
    /// # Errors
    ///
    /// Returns the OS error code.
    fn add_cdev(&mut self, number: DeviceNumber) -> Result<(), i32>;

    /// Deletes the character device.
    fn del_cdev(&mut self, number: DeviceNumber);
}

/// A registered tarot device. Dropping it unregisters everything.
pub struct Lifecycle<R: Registrar> {
    registrar: R,
    first: DeviceNumber,
    class: Option<R::Class>,
}

impl<R: Registrar> Lifecycle<R> {
    /// Registers the device: number region, class, node, then character
    /// device.
    ///
    /// # Errors
    ///
    /// Returns the failing step. Steps already completed are undone in
    /// reverse order before returning.
    pub fn start(mut registrar: R) -> Result<Self, LifecycleError> {
        log::info!(target: "tarot", "registering device");

        let first = registrar
            .alloc_region(FIRST_MINOR, DEVICE_COUNT, DEVICE_NAME)
            .map_err(|code| {
                log::warn!(target: "tarot", "can't register character device with error code = {code}");
                LifecycleError::Region(code)
            })?;
        log::info!(
            target: "tarot",
            "registered character device with major number = {} and minor numbers {}..{}",
            first.major,
            FIRST_MINOR,
            FIRST_MINOR + DEVICE_COUNT
        );

        log::info!(target: "tarot", "creating device class");
        let class = match registrar.create_class(CLASS_NAME) {
            Ok(class) => class,
            Err(code) => {
                log::warn!(target: "tarot", "device class creation failed");
                registrar.unregister_region(first, DEVICE_COUNT);
                return Err(LifecycleError::Class(code));
            }
        };

        log::info!(target: "tarot", "creating device");
        if let Err(code) = registrar.create_node(&class, first, DEVICE_NAME) {
            log::warn!(target: "tarot", "device creation failed");
            registrar.destroy_class(class);
            registrar.unregister_region(first, DEVICE_COUNT);
            return Err(LifecycleError::Node(code));
        }

        log::info!(target: "tarot", "adding device");
        if let Err(code) = registrar.add_cdev(first) {
            log::warn!(target: "tarot", "device addition failed");
            registrar.destroy_node(&class, first);
            registrar.destroy_class(class);
            registrar.unregister_region(first, DEVICE_COUNT);
            return Err(LifecycleError::Cdev(code));
        }

        Ok(Self {
            registrar,
            first,
            class: Some(class),
        })
    }

    /// Returns the first allocated device number.
    #[must_use]
    pub const fn first(&self) -> DeviceNumber {
        self.first
    }

    /// Returns the allocated major number.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.first.major
    }

    /// Returns the registrar.
    #[must_use]
    pub const fn registrar(&self) -> &R {
        &self.registrar
    }

    /// Unregisters the device.
    pub fn stop(self) {
        drop(self);
    }
}

impl<R: Registrar> Drop for Lifecycle<R> {
    fn drop(&mut self) {
        let Some(class) = self.class.take() else {
            return;
        };

        log::info!(target: "tarot", "unregistering device");
        self.registrar.del_cdev(self.first);
        self.registrar.destroy_node(&class, self.first);
        self.registrar.destroy_class(class);
        self.registrar.unregister_region(self.first, DEVICE_COUNT);
    }
}
