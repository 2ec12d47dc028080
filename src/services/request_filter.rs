//! Request Filter for Tabbrowser.
//!
//! Keyword ad blocking: any request whose URL contains one of [`AD_KEYWORDS`]
//! is refused. Matching is a plain case-sensitive substring test with no
//! domain parsing.

/// Substrings that mark a request as an ad request.
pub const AD_KEYWORDS: &[&str] = &["ads", "doubleclick", "adservice"];

/// Returns true iff `url` contains any of [`AD_KEYWORDS`].
pub fn should_block(url: &str) -> bool {
    AD_KEYWORDS.iter().any(|keyword| url.contains(keyword))
}

/// Trait defining request filter operations.
pub trait RequestFilterTrait {
    fn record_blocked(&mut self, url: &str);
    fn blocked_count(&self) -> u64;
    fn content_script(&self) -> String;
}

/// Per-session filter state.
#[derive(Debug, Default)]
pub struct RequestFilter {
    blocked: u64,
}

impl RequestFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestFilterTrait for RequestFilter {
    fn record_blocked(&mut self, url: &str) {
        tracing::debug!(url, "request blocked");
        self.blocked += 1;
    }

    fn blocked_count(&self) -> u64 {
        self.blocked
    }

    /// Script injected into filtered tabs so sub-resource requests get the
    /// same keyword check as top-level navigations.
    fn content_script(&self) -> String {
        let keywords = serde_json::to_string(AD_KEYWORDS).unwrap_or_else(|_| "[]".to_string());
        format!(
            r#"(function(){{
var K={keywords};
function blocked(u){{u=String(u||'');for(var i=0;i<K.length;i++){{if(u.indexOf(K[i])!==-1)return true}}return false}}
var of=window.fetch;
if(of){{window.fetch=function(r,o){{var u=(r&&r.url)?r.url:r;if(blocked(u))return Promise.reject(new TypeError('blocked'));return of.apply(this,arguments)}}}}
var xo=XMLHttpRequest.prototype.open;
XMLHttpRequest.prototype.open=function(m,u){{if(blocked(u)){{this.__tbBlocked=true}}return xo.apply(this,arguments)}};
var xs=XMLHttpRequest.prototype.send;
XMLHttpRequest.prototype.send=function(){{if(this.__tbBlocked){{this.abort();return}}return xs.apply(this,arguments)}};
function scrub(n){{if(n.nodeType!==1)return;var s=n.getAttribute&&n.getAttribute('src');if(s&&blocked(s)){{n.remove();return}}if(n.querySelectorAll){{n.querySelectorAll('[src]').forEach(function(c){{if(blocked(c.getAttribute('src')))c.remove()}})}}}}
new MutationObserver(function(ms){{ms.forEach(function(m){{m.addedNodes.forEach(scrub)}})}}).observe(document.documentElement||document,{{childList:true,subtree:true}});
}})();"#
        )
    }
}
