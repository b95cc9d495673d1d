pub mod sysinfo;
