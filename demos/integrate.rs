use stencil_calculus::csv::write_csv_1d;

mod util;

fn main() {
    let args = util::Args::cli_parse("integrate");
    let x = args.grid();
    let y: Vec<f64> = x.iter().map(|v| args.function.value(*v)).collect();
    let initial = 0.0;

    let result = if args.banded {
        args.stencil.integrate_banded(
            &x,
            &y,
            args.order,
            initial,
            args.chunk_size,
        )
    } else {
        args.stencil.integrate(&x, &y, args.order, initial)
    };
    let numeric = result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    let analytic: Vec<f64> = x
        .iter()
        .map(|v| {
            initial + args.function.antiderivative(*v)
                - args.function.antiderivative(x[0])
        })
        .collect();

    println!(
        "stencil {} order {}: max error {:e}",
        args.stencil,
        args.order,
        util::max_error(numeric.as_slice(), &analytic, 0..x.len())
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
