use stencil_calculus::csv::write_csv_1d;

mod util;

fn main() {
    let args = util::Args::cli_parse("derive");
    let x = args.grid();
    let y: Vec<f64> = x.iter().map(|v| args.function.value(*v)).collect();

    let result = if args.banded {
        args.stencil
            .derive_banded(&x, &y, args.order, args.chunk_size)
    } else {
        args.stencil.derive(&x, &y, args.order)
    };
    let numeric = result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    let analytic: Vec<f64> = x
        .iter()
        .map(|v| args.function.derivative(*v, args.order))
        .collect();

    let interior = args.stencil.interior(x.len());
    println!(
        "stencil {} order {}: max interior error {:e}",
        args.stencil,
        args.order,
        util::max_error(numeric.as_slice(), &analytic, interior)
    );

    if let Some(ref path) = args.output {
        let columns = [
            ("x", &x[..]),
            ("y", &y[..]),
            ("numeric", numeric.as_slice()),
            ("analytic", &analytic[..]),
        ];
        if let Err(e) = write_csv_1d(path, &columns) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    args.finish();
}
