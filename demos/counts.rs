use std::ops::RangeInclusive;
use clap::Parser;
use cayley::monoids;

/// Count finite monoids
///
/// Enumerates the monoids of each order in the given range, up to isomorphism
/// and anti-isomorphism, and prints the count per order followed by a single
/// comma separated line of all counts.
/// See https://oeis.org/A058129 for the counts up to isomorphism alone.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// The orders to enumerate, a single number like 4 or a range like 2...5.
    #[clap(parse(try_from_str = parse_order_range))]
    orders : RangeInclusive<usize>,
    /// Print each Cayley table as well as the counts.
    #[clap(short, long)]
    tables : bool,
}

fn parse_order_range(s:&str) -> Result<RangeInclusive<usize>,String> {
    let number = |t:&str|t.trim().parse::<usize>().map_err(|_|format!("Could not interpret '{}' as a number",t.trim()));
    if let Some((low,high)) = s.split_once("...") {
        Ok(number(low)?..=number(high)?)
    } else {
        let n = number(s)?;
        Ok(n..=n)
    }
}

fn main() {
    let args = Args::parse();
    let mut counts : Vec<usize> = vec![];
    for order in args.orders {
        let mut count = 0;
        for table in monoids(order) {
            count += 1;
            if args.tables {
                for row in 0..order {
                    println!("{}",table[order*row..order*(row+1)].iter().map(|v|v.to_string()).collect::<Vec<_>>().join(" "));
                }
                println!();
            }
        }
        println!("{}\t{}",order,count);
        counts.push(count);
    }
    println!("{}",counts.iter().map(|v|v.to_string()).collect::<Vec<_>>().join(","));
}
