//! Reading the CPU cycle counter.
//!
//! Elapsed cycles are `end.wrapping_sub(start)` of two consecutive reads.

/// Source of cycle counts for the benchmark loop.
pub trait CycleCounter {
    /// Read the counter before the measured code.
    fn start(&mut self) -> u64;
    /// Read the counter after the measured code.
    fn end(&mut self) -> u64;
}

/// The hardware time-stamp counter of the current CPU.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tsc;

impl Tsc {
    /// Whether this target has a counter. If not, every read returns 0.
    pub const SUPPORTED: bool = cfg!(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64"
    ));
}

impl CycleCounter for Tsc {
    #[inline(always)]
    fn start(&mut self) -> u64 { core_cycles() }

    #[inline(always)]
    fn end(&mut self) -> u64 { core_cycles() }
}

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn core_cycles() -> u64 {
    use core::arch::x86::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        _rdtsc()
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn core_cycles() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        _rdtsc()
    }
}

// pmccntr_el0 is not readable from user space on a stock kernel, use the
// virtual counter instead.
#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn core_cycles() -> u64 {
    use core::arch::asm;
    let mut x: u64;
    unsafe {
        asm!("isb", "mrs {}, cntvct_el0", out(reg) x);
    }
    x
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub fn core_cycles() -> u64 { 0 }
