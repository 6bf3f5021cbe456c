// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
use error_chain::*;

error_chain! {

    errors {
        InvalidDimensions(height: usize, width: usize) {
            description("maze dimensions must be positive")
            display("invalid maze dimensions {}x{} (height x width): both must be at least 1", height, width)
        }
        DimensionsTooLarge(height: usize, width: usize) {
            description("maze dimensions are too large")
            display("maze dimensions {}x{} (height x width) are too large: each side must fit in a u32 and the cell count in a usize", height, width)
        }
    }
}
