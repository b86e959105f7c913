use fibre_inject::{
  inject, register_service, ContainerConfig, Error, LocalContainer, MetadataTable,
  TypeDescriptor,
};

struct Settings;
struct Renderer;

fn main() -> Result<(), Error> {
  let config = ContainerConfig::from_yaml_str("native_types: standard\n")?;

  let metadata = MetadataTable::builder()
    .constructor::<Settings>([])
    .constructor::<Renderer>([TypeDescriptor::of::<Settings>(), TypeDescriptor::named("Array")])
    .build();

  let mut container = LocalContainer::with_config(metadata, config);
  register_service!(container, Settings);
  register_service!(container, Renderer);

  // `Array` is not native under the standard policy, so no injector is needed.
  let params = container.get::<Renderer>()?;
  println!("Renderer takes {} params", params.len());

  // Now cover the first slot explicitly.
  inject!(container, Renderer, 0 => "app_settings")?;
  let params = container.get::<Renderer>()?;
  assert!(params[0].is_injector());
  println!("Renderer param 0 now injects `{}`", params[0].injector().map(|i| i.key().as_str()).unwrap_or("?"));

  Ok(())
}
