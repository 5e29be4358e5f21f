fn main() {
    println!("{}", arrayfft::parallel_lane_threshold());
}
