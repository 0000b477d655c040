//! The parent keeps no descriptor for a redirect target once the child
//! has been started.
//!
//! Kept in its own test binary: the descriptor count of this process is
//! only stable while no other test runs alongside it.

#![cfg(target_os = "linux")]

use e2e_tests::{expect, open_descriptor_count, TestDir, SH};
use procrun_process::{do_exec_redirect, ProcessRunner};

#[test]
fn test_redirect_closes_parent_descriptor() {
    let test = TestDir::new("redirect-parent-fds");

    test.run(|dir| {
        let runner = ProcessRunner::new();
        let before = open_descriptor_count();

        for attempt in 0..5 {
            let out = dir.join(&format!("out-{}.txt", attempt));
            expect(
                do_exec_redirect(&out, &[SH, "-c", "printf ok"]),
                true,
                &format!("successful redirect {}", attempt),
            )?;
            expect(
                runner.exec_and_wait_with_redirect(&out, &[SH, "-c", "exit 3"]),
                false,
                &format!("failing redirect {}", attempt),
            )?;
        }
        let missing = dir.join("does-not-exist").display().to_string();
        expect(
            runner.exec_and_wait_with_redirect(dir.join("exec-failure.txt"), &[missing.as_str()]),
            false,
            "redirect with missing executable",
        )?;

        let after = open_descriptor_count();
        println!("Open descriptors: before={} after={}", before, after);
        if before == after {
            Ok(())
        } else {
            Err(format!("descriptor count changed from {} to {}", before, after))
        }
    });
}
