use crate::bridge;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use portfolio_core::AssetLink;

/// Block link per file named in the asset manifest. A manifest that cannot
/// be fetched or parsed is logged and renders nothing.
#[component]
pub fn FileList(manifest_url: String, base: String) -> impl IntoView {
    let (links, set_links) = create_signal(Vec::<AssetLink>::new());

    spawn_local(async move {
        match bridge::load_manifest(&manifest_url, &base).await {
            Ok(found) => {
                log::info!("asset manifest listed {} files", found.len());
                set_links.set(found);
            }
            Err(err) => log::error!("asset manifest {manifest_url}: {err}"),
        }
    });

    view! {
      <div class="file-list">
        <For
          each=move || links.get().into_iter().enumerate()
          key=|(i, _)| *i
          children=|(_, link)| view! { <a class="file-link" href=link.href>{link.label}</a> }
        />
      </div>
    }
}
