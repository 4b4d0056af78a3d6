fn main() -> anyhow::Result<()> {
    depend_lib::main()
}
