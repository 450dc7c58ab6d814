use crate::logfile::LogView;

use super::Finding;

const WEAK_CPU_FAMILIES: [&str; 3] = ["APU", "Pentium", "Celeron"];

/// Flags CPU families that are below minimum spec for streaming.
///
/// Only the first `CPU Name` line is inspected; a log without one reports
/// nothing.
#[must_use]
pub fn weak_cpu(view: &LogView) -> Option<Finding> {
    let cpu = view.first("CPU Name")?;
    WEAK_CPU_FAMILIES
        .iter()
        .any(|family| cpu.contains(family))
        .then(|| {
            Finding::critical(
                "INSUFFICIENT HARDWARE",
                "Your system is below minimum specs for OBS to run and too weak to do livestreaming. There are no settings which will save you from that lack of processing power. Replace your PC or Laptop.",
            )
        })
}

/// Flags dual-GPU laptops where OBS renders on the integrated Intel GPU.
#[must_use]
pub fn integrated_gpu(view: &LogView) -> Option<Finding> {
    let d3d_adapter = view.first("Loading up D3D11")?;
    let adapter_count =
        view.search("Adapter 1").len() + usize::from(view.first("Adapter 2").is_some());
    (adapter_count == 2 && d3d_adapter.contains("Intel")).then(|| {
        Finding::critical(
            "WRONG GPU",
            "Your Laptop has two GPUs. OBS is running on the weak integrated Intel GPU. For better performance as well as game capture being available you should run OBS on the dedicated GPU. Check the <a href=\"https://obsproject.com/wiki/Laptop-Performance-Issues\">Laptop Troubleshooting Guide</a>.",
        )
    })
}

#[cfg(test)]
#[path = "hardware_tests.rs"]
mod tests;
