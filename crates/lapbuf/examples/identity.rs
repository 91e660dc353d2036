//! The classic demonstration: economy SVD of the 3×3 identity matrix on a
//! 64-element fixed buffer.

use lapbuf::prelude::*;

const ROWS: usize = 3;
const COLS: usize = 3;
const BUF_SIZE: usize = 64;

fn main() {
    // Column-major 3×3 identity.
    let a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

    let job = SvdJob::new(ROWS, COLS, false, false);
    let mut u = vec![0.0; job.u_len()];
    let mut s = vec![0.0; job.s_len()];
    let mut vt = vec![0.0; job.vt_len()];

    let kernel = JacobiKernel::new();
    let mut arena = FixedArena::with_capacity(BUF_SIZE);

    match decompose(
        &kernel, &mut u, &mut s, &mut vt, &a, ROWS, COLS, false, false, &mut arena,
    ) {
        Ok(()) => {
            println!("singular values: {s:?}");
            println!("U[0, 0] = {}", u[0]);
            println!("arena in use after call: {} of {}", arena.used(), arena.capacity());
        }
        Err(err) => eprintln!("decomposition failed: {err}"),
    }
}
