use crate::command::{self, Device};
use crate::config::{Settings, UnmountOptions, settings};
use crate::error::{Result, UmountError};
use crate::exec::{CommandRunner, ShellRunner};
use crate::platform::Platform;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Streams captured from an unmount command.
///
/// Both are `None` when no process was spawned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmountOutput {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

/// Unmounts devices and checks mount status by shelling out to OS tools.
///
/// Each call issues at most one child process and shares no state with other
/// calls, so one `Unmounter` can serve concurrent operations.
#[derive(Clone)]
pub struct Unmounter {
    platform: Option<Platform>,
    defaults: Option<Arc<Settings>>,
    runner: Arc<dyn CommandRunner>,
}

impl fmt::Debug for Unmounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unmounter")
            .field("platform", &self.platform)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl Default for Unmounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Unmounter {
    /// Detects the platform and reads the process-wide defaults on every
    /// call, and runs commands through `/bin/sh`.
    pub fn new() -> Self {
        Self {
            platform: None,
            defaults: None,
            runner: Arc::new(ShellRunner::new()),
        }
    }

    /// Pin the platform instead of detecting it per call.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Use a fixed defaults snapshot instead of the process-wide one.
    pub fn with_defaults(mut self, defaults: Settings) -> Self {
        self.defaults = Some(Arc::new(defaults));
        self
    }

    pub fn with_runner<R>(mut self, runner: R) -> Self
    where
        R: CommandRunner + 'static,
    {
        self.runner = Arc::new(runner);
        self
    }

    fn platform(&self) -> Platform {
        self.platform.clone().unwrap_or_else(Platform::current)
    }

    fn defaults(&self) -> Arc<Settings> {
        self.defaults.clone().unwrap_or_else(settings::current)
    }

    /// The command `unmount` would run, or `None` where it runs nothing.
    pub fn unmount_command(&self, device: &str, options: &UnmountOptions) -> Result<Option<String>> {
        let device = Device::new(device)?;
        Ok(self.build_unmount(&self.platform(), &device, options))
    }

    fn build_unmount(
        &self,
        platform: &Platform,
        device: &Device,
        options: &UnmountOptions,
    ) -> Option<String> {
        if platform.is_windows() {
            return None;
        }
        let resolved = options.resolve(&self.defaults());
        command::unmount_command(platform, device, &resolved)
    }

    /// Unmount `device`.
    ///
    /// On Linux every partition of a whole disk is targeted and failures for
    /// partitions that were never mounted are swallowed by the shell. On
    /// Windows this is a no-op.
    pub async fn unmount(&self, device: &str, options: &UnmountOptions) -> Result<UnmountOutput> {
        let device = Device::new(device)?;

        let platform = self.platform();
        let Some(command) = self.build_unmount(&platform, &device, options) else {
            debug!("Unmount is a no-op on {}", platform);
            return Ok(UnmountOutput::default());
        };

        debug!("Unmounting {}: {}", device, command);
        let output = self.runner.run(&command).await?;
        Ok(UnmountOutput {
            stdout: Some(output.stdout),
            stderr: Some(output.stderr),
        })
    }

    /// Whether `device` appears anywhere in the mount table listing.
    ///
    /// This is a literal substring match with no path normalization. Any
    /// stderr output from `mount` is treated as a failure. Always `true` on
    /// Windows.
    pub async fn is_mounted(&self, device: &str) -> Result<bool> {
        let device = Device::new(device)?;

        let platform = self.platform();
        if platform.is_windows() {
            debug!("Reporting {} as mounted on {}", device, platform);
            return Ok(true);
        }

        let output = self.runner.run(command::mount_table_command()).await?;
        if !output.stderr.is_empty() {
            return Err(UmountError::UnexpectedStderr {
                stderr: output.stderr,
            });
        }

        Ok(output.stdout.contains(device.as_str()))
    }
}

/// Unmount `device` on the host platform using the process-wide defaults.
pub async fn unmount(device: &str, options: &UnmountOptions) -> Result<UnmountOutput> {
    Unmounter::new().unmount(device, options).await
}

/// Check whether `device` appears in the host's mount table.
pub async fn is_mounted(device: &str) -> Result<bool> {
    Unmounter::new().is_mounted(device).await
}
