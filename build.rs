fn main() -> shadow_rs::SdResult<()> {
    // Build metadata for `lending-console --version`
    shadow_rs::ShadowBuilder::builder().build()?;
    Ok(())
}
