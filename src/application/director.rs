use crate::{
    Computer, ForgeError,
    ports::{STEP_ORDER, SharedAssembler},
};
use std::sync::Arc;

/// Drives the construction steps against the currently selected assembler.
///
/// The director only keeps a shared handle to its assembler. The caller may
/// hold the same assembler elsewhere; the lock inside [`SharedAssembler`]
/// keeps a build from interleaving with another user of that instance.
#[derive(Debug, Default, Clone)]
pub struct Director {
    assembler: Option<SharedAssembler>,
}

impl Director {
    /// Creates a director with no assembler selected.
    pub fn new() -> Self {
        Self { assembler: None }
    }

    /// Creates a director with `assembler` already selected.
    pub fn with_assembler(assembler: SharedAssembler) -> Self {
        Self {
            assembler: Some(assembler),
        }
    }

    /// Replaces the current assembler. The previous one keeps whatever state
    /// it last held.
    pub fn select(&mut self, assembler: SharedAssembler) {
        self.assembler = Some(assembler);
    }

    /// Drops the current assembler handle.
    pub fn clear(&mut self) {
        self.assembler = None;
    }

    /// Checks if an assembler is selected.
    pub fn is_ready(&self) -> bool {
        self.assembler.is_some()
    }

    /// Returns the selected assembler handle.
    pub fn current(&self) -> Option<SharedAssembler> {
        self.assembler.as_ref().map(Arc::clone)
    }

    /// Runs every step in [`STEP_ORDER`] and returns the finalized computer.
    pub fn build(&self) -> Result<Computer, ForgeError> {
        let shared = self.assembler.as_ref().ok_or_else(|| {
            tracing::warn!("Build requested with no assembler selected");
            ForgeError::NoAssemblerSelected
        })?;

        let mut assembler = shared
            .lock()
            .map_err(|e| ForgeError::AssemblerUnavailable(e.to_string()))?;

        let instance = assembler.id();
        for step in STEP_ORDER {
            tracing::debug!(%instance, %step, "Running assembly step");
            step.apply(&mut *assembler);
        }

        let computer = assembler.finalize();
        tracing::info!(%instance, brand = computer.brand(), "Computer assembled");
        Ok(computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemblers::ProfileAssembler;
    use crate::ports::{Assembler, AssemblerId, AssemblyStep, share};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingAssembler {
        id: AssemblerId,
        calls: Arc<Mutex<Vec<AssemblyStep>>>,
    }

    impl RecordingAssembler {
        fn record(&self, step: AssemblyStep) {
            self.calls.lock().unwrap().push(step);
        }
    }

    impl Assembler for RecordingAssembler {
        fn id(&self) -> AssemblerId {
            self.id
        }

        fn set_core(&mut self) {
            self.record(AssemblyStep::Core);
        }

        fn set_brand(&mut self) {
            self.record(AssemblyStep::Brand);
        }

        fn set_memory(&mut self) {
            self.record(AssemblyStep::Memory);
        }

        fn set_monitor(&mut self) {
            self.record(AssemblyStep::Monitor);
        }

        fn set_graphics_unit(&mut self) {
            self.record(AssemblyStep::GraphicsUnit);
        }

        fn finalize(&self) -> Computer {
            Computer::new(0, "RECORDED".to_string(), 0, 0, 0)
        }
    }

    // Writes the number of builds seen so far as the core count.
    #[derive(Debug, Default)]
    struct SequenceAssembler {
        id: AssemblerId,
        builds: u32,
        cores: u32,
    }

    impl Assembler for SequenceAssembler {
        fn id(&self) -> AssemblerId {
            self.id
        }

        fn set_core(&mut self) {
            self.builds += 1;
            self.cores = self.builds;
        }

        fn set_brand(&mut self) {}

        fn set_memory(&mut self) {}

        fn set_monitor(&mut self) {}

        fn set_graphics_unit(&mut self) {}

        fn finalize(&self) -> Computer {
            Computer::new(self.cores, "SEQUENCE".to_string(), 0, 0, 0)
        }
    }

    #[test]
    fn test_build_without_assembler() {
        let director = Director::new();

        assert!(!director.is_ready());
        assert_eq!(director.build(), Err(ForgeError::NoAssemblerSelected));
    }

    #[test]
    fn test_clear_returns_to_unselected() {
        let mut director = Director::with_assembler(share(ProfileAssembler::variant_a()));
        assert!(director.build().is_ok());

        director.clear();
        assert_eq!(director.build(), Err(ForgeError::NoAssemblerSelected));
    }

    #[test]
    fn test_steps_run_in_fixed_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorder = RecordingAssembler {
            calls: Arc::clone(&calls),
            ..Default::default()
        };
        let director = Director::with_assembler(share(recorder));

        director.build().unwrap();

        assert_eq!(*calls.lock().unwrap(), STEP_ORDER.to_vec());
    }

    #[test]
    fn test_repeated_builds_are_identical() {
        let director = Director::with_assembler(share(ProfileAssembler::variant_b()));

        let first = director.build().unwrap();
        let second = director.build().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_select_isolates_profiles() {
        let mut director = Director::new();

        director.select(share(ProfileAssembler::variant_a()));
        let a = director.build().unwrap();

        director.select(share(ProfileAssembler::variant_b()));
        let b = director.build().unwrap();

        assert_eq!(a.to_string(), "BRAND-A, Core: [4], Mem: [8], Graphic: [1], Monitor: [1]");
        assert_eq!(b.to_string(), "BRAND-B, Core: [6], Mem: [16], Graphic: [2], Monitor: [1]");
    }

    #[test]
    fn test_select_leaves_previous_assembler_untouched() {
        let first = share(ProfileAssembler::variant_a());
        let mut director = Director::with_assembler(Arc::clone(&first));
        director.build().unwrap();

        director.select(share(ProfileAssembler::variant_b()));
        director.build().unwrap();

        let snapshot = first.lock().unwrap().finalize();
        assert_eq!(snapshot.brand(), "BRAND-A");
        assert_eq!(snapshot.cores(), 4);
    }

    #[test]
    fn test_product_is_detached_snapshot() {
        let director = Director::with_assembler(share(SequenceAssembler::default()));

        let first = director.build().unwrap();
        let second = director.build().unwrap();

        assert_eq!(first.cores(), 1);
        assert_eq!(second.cores(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_poisoned_assembler_is_unavailable() {
        let assembler = share(ProfileAssembler::variant_a());
        let handle = Arc::clone(&assembler);
        let outcome = std::thread::spawn(move || {
            let _guard = handle.lock().unwrap();
            panic!("assembler failed mid-build");
        })
        .join();
        assert!(outcome.is_err());

        let director = Director::with_assembler(assembler);

        assert!(matches!(
            director.build(),
            Err(ForgeError::AssemblerUnavailable(_))
        ));
    }

    #[test]
    fn test_current_shares_handle() {
        let assembler = share(ProfileAssembler::variant_a());
        let director = Director::with_assembler(Arc::clone(&assembler));

        let current = director.current().unwrap();
        assert!(Arc::ptr_eq(&current, &assembler));
    }
}
