fn main() -> anyhow::Result<()> {
    d5sim_cui::run_from_args()
}
