//! Exit handling: signal handlers and terminal restoration.

/// Reset colors and show the cursor.
const RESET_SEQUENCE: &[u8] = b"\x1b[0m\x1b[?25h\r\n";

/// Restore canonical mode and echo using termios directly
fn reset_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Raw write of the reset sequence. Bypasses `std::io::Stdout`, which may
/// be mid-write when a signal lands.
fn write_reset(fd: libc::c_int) -> isize {
    unsafe {
        libc::write(
            fd,
            RESET_SEQUENCE.as_ptr() as *const libc::c_void,
            RESET_SEQUENCE.len(),
        )
    }
}

/// Registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_termios();
    // Only print escape codes if stdout is a TTY (not when piping)
    if unsafe { libc::isatty(1) } == 1 {
        write_reset(1);
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so atexit cleanup runs
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};

    fn pipe() -> (libc::c_int, libc::c_int) {
        let mut fds = [0 as libc::c_int; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
        (fds[0], fds[1])
    }

    #[test]
    fn reset_writes_whole_sequence() {
        let (read_fd, write_fd) = pipe();
        assert_eq!(write_reset(write_fd), RESET_SEQUENCE.len() as isize);

        let mut buf = [0u8; 32];
        let n = unsafe { libc::read(read_fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
        unsafe {
            libc::close(read_fd);
            libc::close(write_fd);
        }
        assert_eq!(&buf[..n as usize], RESET_SEQUENCE);
    }

    #[test]
    fn reset_does_not_touch_locked_stdout() {
        let (read_fd, write_fd) = pipe();
        let mut stdout = io::stdout().lock();
        stdout.write_all(b"").unwrap();
        assert_eq!(write_reset(write_fd), RESET_SEQUENCE.len() as isize);
        cleanup_on_exit();
        drop(stdout);
        unsafe {
            libc::close(read_fd);
            libc::close(write_fd);
        }
    }
}
