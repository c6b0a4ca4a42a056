use diamond_square::generate;

fn main() -> diamond_square::Result<()> {
    env_logger::init();

    // 2^2 + 1 = 5×5, no noise
    let grid = generate(2, 0.0)?;
    for row in grid.rows() {
        for v in row {
            print!("{:>7.3} ", v);
        }
        println!();
    }
    Ok(())
}
