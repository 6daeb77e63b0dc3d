use std::mem;

/// Returns `(columns, rows)` for the current terminal if stdout is a TTY.
pub fn dimensions() -> Option<(usize, usize)> {
    unsafe {
        let fd = libc::STDOUT_FILENO;
        if libc::isatty(fd) != 1 {
            log!("term_size: stdout is not a TTY");
            return None;
        }

        let mut ws: libc::winsize = mem::zeroed();

        if libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) != 0 {
            return None;
        }

        let cols = ws.ws_col as usize;
        let rows = ws.ws_row as usize;
        if cols > 0 && rows > 0 {
            Some((cols, rows))
        } else {
            None
        }
    }
}

/// Terminal width in columns, or `fallback` when it cannot be queried.
pub fn columns_or(fallback: usize) -> usize {
    match dimensions() {
        Some((cols, _)) => cols,
        None => fallback,
    }
}
