mod assembly_service;

pub use assembly_service::AssemblyService;
